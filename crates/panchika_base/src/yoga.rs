//! Yoga classification from the sum of Sun and Moon sidereal longitudes.
//!
//! The sum (mod 360) is divided into 27 yogas of 13 deg 20' each,
//! from Vishkambha at 0 deg. Unlike the elongation metrics, the
//! ayanamsha does not cancel in the sum, so sidereal longitudes are
//! required.

use crate::angle::normalize_360;

/// Span of one yoga: 360/27 degrees, same as a nakshatra.
pub const YOGA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Result of yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    /// 1-based yoga number (1 = Vishkambha, 27 = Vaidhriti).
    pub index: u8,
    /// Decimal degrees within the yoga [0, 13.333...).
    pub degrees_in_yoga: f64,
}

/// Classify the yoga from (Sun + Moon) sidereal longitude sum in degrees.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let s = normalize_360(sum_deg);
    let index = ((s / YOGA_SPAN_DEG).floor() as u8 + 1).min(27);
    YogaPosition {
        index,
        degrees_in_yoga: s - (index - 1) as f64 * YOGA_SPAN_DEG,
    }
}
