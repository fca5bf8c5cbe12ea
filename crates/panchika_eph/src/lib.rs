//! Ephemeris query interface for the panchang pipeline.
//!
//! The classifier and aggregator never compute celestial positions
//! themselves; they consume this trait. Any engine that can report an
//! ecliptic longitude with its angular speed, find a longitude crossing,
//! and find horizon events can drive the whole pipeline. The bundled
//! [`AnalyticEphemeris`] is a low-precision, dependency-free
//! implementation; a JPL-kernel-grade engine slots in behind the same
//! trait.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod analytic;

pub use analytic::AnalyticEphemeris;

/// Celestial bodies the panchang needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Ecliptic reference frame for longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Equinox-of-date tropical longitude.
    Tropical,
    /// Tropical longitude minus the ayanamsha (fixed sidereal zodiac).
    Sidereal,
}

/// Horizon crossing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizonEvent {
    Rise,
    Set,
}

/// One body's ecliptic longitude and angular speed at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSample {
    /// Ecliptic longitude in degrees, normalized to [0, 360).
    pub longitude_deg: f64,
    /// Angular speed in degrees per day (negative when retrograde).
    pub speed_deg_per_day: f64,
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Errors an ephemeris implementation may report.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Ephemeris data does not cover the requested epoch or body.
    DataUnavailable(&'static str),
    /// The implementation does not support the requested query.
    Unsupported(&'static str),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataUnavailable(msg) => write!(f, "ephemeris data unavailable: {msg}"),
            Self::Unsupported(msg) => write!(f, "unsupported ephemeris query: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// The query interface the panchang core consumes.
///
/// All methods are read-only; implementations fix their configuration
/// (ayanamsha, data files) at construction so `&self` queries can run
/// concurrently.
pub trait Ephemeris {
    /// Ecliptic longitude and angular speed of a body at a JD (UT).
    fn longitude_and_speed(
        &self,
        jd_ut: f64,
        body: Body,
        frame: Frame,
    ) -> Result<AngularSample, EphemerisError>;

    /// Instant near `start_jd` at which the body's longitude crosses
    /// `target_deg`. Used directly for nakshatra and rashi boundaries.
    ///
    /// The returned crossing may lie before `start_jd` when the target
    /// was passed more recently in the past than it will be reached in
    /// the future; callers that need a forward boundary must check.
    fn search_crossing(
        &self,
        body: Body,
        target_deg: f64,
        start_jd: f64,
        frame: Frame,
    ) -> Result<f64, EphemerisError>;

    /// Rise or set instant of a body on the civil day containing
    /// `jd_ut`, or `Ok(None)` when the event does not occur (polar
    /// day/night). Absence is a result, not an error.
    fn search_horizon_event(
        &self,
        jd_ut: f64,
        body: Body,
        event: HorizonEvent,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError>;
}
