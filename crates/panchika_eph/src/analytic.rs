//! Low-precision analytic ephemeris.
//!
//! Truncated series for the Sun (three terms) and Moon (four terms),
//! good to a few tenths of a degree over a few centuries around J2000 —
//! enough to place panchang boundaries within a few minutes. Speeds are
//! the analytic derivatives of the same series, so longitude and rate
//! are always mutually consistent.
//!
//! Sidereal longitudes subtract the JD-based Lahiri ayanamsha
//! polynomial. Sunrise/sunset use the solar declination / hour-angle
//! formula with the standard 50-arcminute depression; the equation of
//! time is ignored, which costs up to ~15 minutes of clock accuracy.

use panchika_base::{normalize_360, normalize_to_pm180};
use panchika_time::{J2000, days_in_month, jd_to_calendar};

use crate::{AngularSample, Body, Ephemeris, EphemerisError, Frame, GeoLocation, HorizonEvent};

/// Iteration cap for the built-in crossing search.
const CROSSING_MAX_ITERATIONS: u32 = 5;
/// Crossing search tolerance in degrees.
const CROSSING_TOLERANCE_DEG: f64 = 1e-3;
/// Depression of the solar upper limb at rise/set: 34' refraction
/// plus 16' semidiameter.
const RISESET_DEPRESSION_DEG: f64 = 50.0 / 60.0;
/// Mean synodic month in days, for the lunar rise approximation.
const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Self-contained analytic ephemeris (Lahiri sidereal zodiac).
///
/// Stateless after construction; all queries take `&self`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Lahiri ayanamsha in degrees and its daily rate at a JD (UT).
    fn ayanamsha_and_rate(jd_ut: f64) -> (f64, f64) {
        let t = (jd_ut - J2000) / 36_525.0;
        let aya = 23.85 + 1.396 * t + 0.0003 * t * t;
        let rate = (1.396 + 0.0006 * t) / 36_525.0;
        (aya, rate)
    }

    /// Tropical solar longitude (deg) and speed (deg/day).
    fn sun_tropical(jd_ut: f64) -> (f64, f64) {
        let n = jd_ut - J2000;
        let mean_lon = 280.460 + 0.985_647_4 * n;
        let g = (357.528 + 0.985_600_3 * n).to_radians();
        let g_rate = 0.985_600_3_f64.to_radians(); // rad/day

        let lon = mean_lon + 1.915 * g.sin() + 0.020 * (2.0 * g).sin();
        let speed = 0.985_647_4 + (1.915 * g.cos() + 0.040 * (2.0 * g).cos()) * g_rate;
        (normalize_360(lon), speed)
    }

    /// Tropical lunar longitude (deg) and speed (deg/day).
    fn moon_tropical(jd_ut: f64) -> (f64, f64) {
        let n = jd_ut - J2000;
        let mean_lon = 218.316 + 13.176_396 * n;
        let m = (134.963 + 13.064_993 * n).to_radians(); // mean anomaly
        let f = (93.272 + 13.229_350 * n).to_radians(); // argument of latitude
        let m_rate = 13.064_993_f64.to_radians();
        let f_rate = 13.229_350_f64.to_radians();

        let lon = mean_lon
            + 6.289 * m.sin()
            + 1.274 * (2.0 * f - m).sin()
            + 0.658 * (2.0 * f).sin();
        let speed = 13.176_396
            + 6.289 * m.cos() * m_rate
            + 1.274 * (2.0 * f - m).cos() * (2.0 * f_rate - m_rate)
            + 1.316 * (2.0 * f).cos() * f_rate;
        (normalize_360(lon), speed)
    }

    /// Solar declination in radians for a day-of-year (Cooper's formula).
    fn solar_declination_rad(doy: u32) -> f64 {
        (23.45 * (360.0 / 365.0 * (284.0 + doy as f64)).to_radians().sin()).to_radians()
    }

    /// Sunrise/sunset JD for the UT day containing `jd_ut`, or None in
    /// polar day/night.
    fn sun_horizon_event(
        jd_ut: f64,
        event: HorizonEvent,
        location: &GeoLocation,
    ) -> Option<f64> {
        let jd_midnight = (jd_ut - 0.5).floor() + 0.5;
        let (year, month, day_frac) = jd_to_calendar(jd_midnight);
        let doy = day_of_year(year, month, day_frac.floor() as u32);

        let decl = Self::solar_declination_rad(doy);
        let lat = location.latitude_rad();
        let cos_ha = ((-RISESET_DEPRESSION_DEG).to_radians().sin() - lat.sin() * decl.sin())
            / (lat.cos() * decl.cos());
        if !cos_ha.is_finite() || cos_ha.abs() > 1.0 {
            return None; // sun never crosses the horizon on this day
        }
        let ha_hours = cos_ha.acos().to_degrees() / 15.0;

        // Local apparent noon in UT hours; the equation of time is ignored.
        let noon_ut = 12.0 - location.longitude_deg / 15.0;
        let hour = match event {
            HorizonEvent::Rise => noon_ut - ha_hours,
            HorizonEvent::Set => noon_ut + ha_hours,
        };
        Some(jd_midnight + hour / 24.0)
    }

    /// Crude lunar rise/set: sunrise delayed by ~50 minutes per day of
    /// lunar age, set half a day later.
    fn moon_horizon_event(
        jd_ut: f64,
        event: HorizonEvent,
        location: &GeoLocation,
    ) -> Option<f64> {
        let sunrise = Self::sun_horizon_event(jd_ut, HorizonEvent::Rise, location)?;
        let age_days = (jd_ut - J2000).rem_euclid(SYNODIC_MONTH_DAYS);
        let rise = sunrise + age_days * (50.0 / 60.0) / 24.0;
        match event {
            HorizonEvent::Rise => Some(rise),
            HorizonEvent::Set => Some(rise + 0.5),
        }
    }
}

/// 1-based day of year for a Gregorian date.
fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (1..month).map(|m| days_in_month(m, year)).sum::<u32>() + day
}

impl Ephemeris for AnalyticEphemeris {
    fn longitude_and_speed(
        &self,
        jd_ut: f64,
        body: Body,
        frame: Frame,
    ) -> Result<AngularSample, EphemerisError> {
        let (tropical, speed) = match body {
            Body::Sun => Self::sun_tropical(jd_ut),
            Body::Moon => Self::moon_tropical(jd_ut),
        };
        let (longitude_deg, speed_deg_per_day) = match frame {
            Frame::Tropical => (tropical, speed),
            Frame::Sidereal => {
                let (aya, aya_rate) = Self::ayanamsha_and_rate(jd_ut);
                (normalize_360(tropical - aya), speed - aya_rate)
            }
        };
        Ok(AngularSample {
            longitude_deg,
            speed_deg_per_day,
        })
    }

    fn search_crossing(
        &self,
        body: Body,
        target_deg: f64,
        start_jd: f64,
        frame: Frame,
    ) -> Result<f64, EphemerisError> {
        // Linearized Newton steps on the wrapped longitude gap. The
        // first gap picks the nearest crossing, which may lie in the
        // past; the caller decides whether that is acceptable.
        let mut jd = start_jd;
        for _ in 0..CROSSING_MAX_ITERATIONS {
            let sample = self.longitude_and_speed(jd, body, frame)?;
            let gap = normalize_to_pm180(target_deg - sample.longitude_deg);
            if gap.abs() < CROSSING_TOLERANCE_DEG {
                break;
            }
            if sample.speed_deg_per_day != 0.0 {
                jd += gap / sample.speed_deg_per_day;
            }
        }
        Ok(jd)
    }

    fn search_horizon_event(
        &self,
        jd_ut: f64,
        body: Body,
        event: HorizonEvent,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError> {
        Ok(match body {
            Body::Sun => Self::sun_horizon_event(jd_ut, event, location),
            Body::Moon => Self::moon_horizon_event(jd_ut, event, location),
        })
    }
}
