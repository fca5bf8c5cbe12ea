//! Karana (half-tithi) classification from Moon-Sun elongation.
//!
//! Each tithi splits into two karanas of 6 degrees, giving 60 half-tithi
//! slots per synodic month, indexed 0-59. The name cycle is irregular:
//! slot 0 is the fixed Kimstughna, slots 1-56 cycle through the seven
//! movable names eight times, and slots 57-59 are the fixed Shakuni,
//! Chatushpada, and Naga. Slot 0 (not 60) is the special first case.

use crate::angle::normalize_360;

/// Span of one karana in degrees of Moon-Sun elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Result of karana lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    /// 0-based half-tithi index within the synodic month (0-59).
    pub half_index: u8,
    /// Elongation consumed within this karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify the karana slot from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let e = normalize_360(elongation_deg);
    let half_index = ((e / KARANA_SEGMENT_DEG).floor() as u8).min(59);
    KaranaPosition {
        half_index,
        degrees_in_karana: e - half_index as f64 * KARANA_SEGMENT_DEG,
    }
}

/// Map a half-tithi index (0-59) to a slot in the 11-entry karana name
/// table: 0 = Kimstughna, 1-7 = the movable cycle (Bava..Vishti),
/// 8 = Shakuni, 9 = Chatushpada, 10 = Naga.
pub fn karana_name_slot(half_index: u8) -> usize {
    match half_index {
        0 => 0,
        1..=56 => 1 + (half_index as usize - 1) % 7,
        57 => 8,
        58 => 9,
        _ => 10,
    }
}
