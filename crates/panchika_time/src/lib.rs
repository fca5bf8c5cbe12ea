//! Calendar and time plumbing for the panchang pipeline.
//!
//! All astronomical arithmetic downstream works on a bare `f64` Julian
//! Day in UT. This crate owns the conversions at the edges: Gregorian
//! calendar dates, month lengths, and fixed-offset local time.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilDate, days_in_month, is_leap_year, jd_ut_to_local_hm, local_midnight_jd_ut};
pub use error::TimeError;
pub use julian::{J2000, calendar_to_jd, jd_to_calendar};
