//! Error types for panchang classification and aggregation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchika_eph::EphemerisError;
use panchika_time::TimeError;

/// Errors from classification or daily aggregation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Error from the ephemeris collaborator.
    Ephemeris(EphemerisError),
    /// Error from calendar conversion.
    Time(TimeError),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for PanchangError {}

impl From<EphemerisError> for PanchangError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
