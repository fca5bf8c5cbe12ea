//! Rashi (zodiac sign) classification from sidereal longitude.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees
//! each, starting from Mesha (Aries) at 0 deg.

use crate::angle::normalize_360;

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// Result of rashi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    /// 1-based rashi number (1 = Mesha, 12 = Meena).
    pub index: u8,
    /// Decimal degrees within the sign [0, 30).
    pub degrees_in_rashi: f64,
}

/// Classify the rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let index = ((lon / RASHI_SPAN_DEG).floor() as u8 + 1).min(12);
    RashiPosition {
        index,
        degrees_in_rashi: lon - (index - 1) as f64 * RASHI_SPAN_DEG,
    }
}
