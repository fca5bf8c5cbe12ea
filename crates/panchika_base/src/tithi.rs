//! Tithi (lunar day) classification from Moon-Sun elongation.
//!
//! The synodic cycle is divided into 30 tithis of 12 degrees of
//! elongation each: Shukla Pratipada at [0, 12) through Amavasya at
//! [348, 360).

use crate::angle::normalize_360;

/// Span of one tithi in degrees of Moon-Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Waxing or waning half of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing fortnight (tithis 1-15, ending at Purnima).
    Shukla,
    /// Waning fortnight (tithis 16-30, ending at Amavasya).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Result of tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// 1-based tithi number (1 = Shukla Pratipada, 30 = Amavasya).
    pub index: u8,
    /// Which fortnight the tithi belongs to.
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub number_in_paksha: u8,
    /// Elongation consumed within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify the tithi from Moon-Sun elongation in degrees.
///
/// The elongation is normalized to [0, 360) first; the index is
/// clamped to 30 against floating-point spill at exactly 360.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let e = normalize_360(elongation_deg);
    let index = ((e / TITHI_SEGMENT_DEG).floor() as u8 + 1).min(30);
    let paksha = if index <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiPosition {
        index,
        paksha,
        number_in_paksha: (index - 1) % 15 + 1,
        degrees_in_tithi: e - (index - 1) as f64 * TITHI_SEGMENT_DEG,
    }
}
