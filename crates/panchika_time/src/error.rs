//! Error types for calendar and time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-date validation and conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar date does not exist (e.g. 2023-02-29, month 13).
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
    },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid civil date: {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl Error for TimeError {}
