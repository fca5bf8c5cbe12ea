//! Nakshatra (lunar mansion) classification from the Moon's sidereal
//! longitude.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, starting from Ashwini at 0 deg. Each nakshatra
//! has 4 padas (quarters) of 3 deg 20'.

use crate::angle::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// Planetary lords of the 27 nakshatras, repeating every 9 in the
/// Vimshottari order starting from Ketu for Ashwini.
const NAKSHATRA_LORDS: [&str; 9] = [
    "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
];

/// Result of nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    /// 1-based nakshatra number (1 = Ashwini, 27 = Revati).
    pub index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Planetary lord of the nakshatra.
    pub lord: &'static str,
    /// Decimal degrees consumed within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Classify the nakshatra and pada from a sidereal lunar longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let index = ((lon / NAKSHATRA_SPAN_DEG).floor() as u8 + 1).min(27);
    let degrees_in = lon - (index - 1) as f64 * NAKSHATRA_SPAN_DEG;
    let pada = ((degrees_in / PADA_SPAN_DEG).floor() as u8).min(3) + 1;
    NakshatraPosition {
        index,
        pada,
        lord: NAKSHATRA_LORDS[(index as usize - 1) % 9],
        degrees_in_nakshatra: degrees_in,
    }
}
