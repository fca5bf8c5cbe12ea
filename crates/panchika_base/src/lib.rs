//! Element classification arithmetic for the Hindu lunisolar calendar.
//!
//! Pure functions from angles to discrete calendar units: Tithi,
//! Nakshatra, Yoga, Karana, Rashi, and Vaar, plus the wrap-aware angle
//! helpers they share and the display-name tables. Nothing here queries
//! an ephemeris; boundary-instant search lives in `panchika_search`.

pub mod angle;
pub mod karana;
pub mod nakshatra;
pub mod names;
pub mod rashi;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use angle::{normalize_360, normalize_to_pm180};
pub use karana::{KARANA_SEGMENT_DEG, KaranaPosition, karana_from_elongation, karana_name_slot};
pub use nakshatra::{
    NAKSHATRA_SPAN_DEG, NakshatraPosition, PADA_SPAN_DEG, nakshatra_from_longitude,
};
pub use names::{Language, NameProfile};
pub use rashi::{RASHI_SPAN_DEG, RashiPosition, rashi_from_longitude};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPosition, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{YOGA_SPAN_DEG, YogaPosition, yoga_from_sum};
