//! Panchang element classification with boundary instants.
//!
//! For each element the current index is pure arithmetic on a single
//! longitude snapshot (delegated to `panchika_base`); the start and end
//! instants come from the generic crossing solver (Tithi, Yoga, Karana)
//! or the ephemeris's own longitude-crossing search (Nakshatra, Rashi).
//!
//! All functions accept and return JD UT; names are resolved through
//! the caller's [`NameProfile`].

use panchika_base::{
    KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_DEG, NameProfile, RASHI_SPAN_DEG, TITHI_SEGMENT_DEG,
    YOGA_SPAN_DEG, karana_from_elongation, karana_name_slot, nakshatra_from_longitude,
    normalize_360, rashi_from_longitude, tithi_from_elongation, yoga_from_sum,
};
use panchika_eph::{Body, Ephemeris, Frame};

use crate::error::PanchangError;
use crate::solver::{SolverConfig, solve_crossing};

/// A classified element with its boundary instants.
///
/// `index` is 1-based for Tithi (1-30), Nakshatra (1-27), Yoga (1-27)
/// and Rashi (1-12); for Karana it is the 0-based half-tithi index
/// (0-59), whose index formula is defined 0-based with slot 0 as the
/// fixed Kimstughna.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementState {
    pub index: u8,
    pub name: &'static str,
    /// Instant the element began (JD, UT).
    pub start_jd: f64,
    /// Instant the element ends (JD, UT).
    pub end_jd: f64,
    /// Whether both boundary searches met tolerance within budget.
    pub converged: bool,
}

/// Moon-Sun elongation and its rate at a JD (UT).
///
/// Returns `(Moon_lon - Sun_lon) mod 360` in [0, 360) with the rate in
/// degrees/day. The ayanamsha cancels in the difference, so tropical
/// coordinates suffice.
pub fn elongation_sample<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
) -> Result<(f64, f64), PanchangError> {
    let moon = eph.longitude_and_speed(jd_ut, Body::Moon, Frame::Tropical)?;
    let sun = eph.longitude_and_speed(jd_ut, Body::Sun, Frame::Tropical)?;
    Ok((
        normalize_360(moon.longitude_deg - sun.longitude_deg),
        moon.speed_deg_per_day - sun.speed_deg_per_day,
    ))
}

/// Sum of Moon and Sun sidereal longitudes and its rate at a JD (UT).
///
/// The ayanamsha does NOT cancel in the sum, so sidereal coordinates
/// are required.
pub fn longitude_sum_sample<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
) -> Result<(f64, f64), PanchangError> {
    let moon = eph.longitude_and_speed(jd_ut, Body::Moon, Frame::Sidereal)?;
    let sun = eph.longitude_and_speed(jd_ut, Body::Sun, Frame::Sidereal)?;
    Ok((
        normalize_360(moon.longitude_deg + sun.longitude_deg),
        moon.speed_deg_per_day + sun.speed_deg_per_day,
    ))
}

/// Moon's sidereal longitude and rate at a JD (UT).
pub fn moon_longitude_sample<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
) -> Result<(f64, f64), PanchangError> {
    let moon = eph.longitude_and_speed(jd_ut, Body::Moon, Frame::Sidereal)?;
    Ok((moon.longitude_deg, moon.speed_deg_per_day))
}

/// Classify the Tithi at an instant, with start/end boundaries.
pub fn tithi_at<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    names: &NameProfile,
    config: &SolverConfig,
) -> Result<ElementState, PanchangError> {
    let (elongation, _) = elongation_sample(eph, jd_ut)?;
    let pos = tithi_from_elongation(elongation);
    let metric = |t: f64| elongation_sample(eph, t);

    let start = solve_crossing(
        &metric,
        jd_ut,
        (pos.index - 1) as f64 * TITHI_SEGMENT_DEG,
        config,
    )?;
    let end = solve_crossing(&metric, jd_ut, pos.index as f64 * TITHI_SEGMENT_DEG, config)?;

    Ok(ElementState {
        index: pos.index,
        name: names.tithi[pos.index as usize - 1],
        start_jd: start.jd,
        end_jd: end.jd,
        converged: start.converged && end.converged,
    })
}

/// Classify the Karana (half-tithi) at an instant, with boundaries.
pub fn karana_at<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    names: &NameProfile,
    config: &SolverConfig,
) -> Result<ElementState, PanchangError> {
    let (elongation, _) = elongation_sample(eph, jd_ut)?;
    let pos = karana_from_elongation(elongation);
    let metric = |t: f64| elongation_sample(eph, t);

    let start = solve_crossing(
        &metric,
        jd_ut,
        pos.half_index as f64 * KARANA_SEGMENT_DEG,
        config,
    )?;
    let end = solve_crossing(
        &metric,
        jd_ut,
        (pos.half_index + 1) as f64 * KARANA_SEGMENT_DEG,
        config,
    )?;

    Ok(ElementState {
        index: pos.half_index,
        name: names.karana[karana_name_slot(pos.half_index)],
        start_jd: start.jd,
        end_jd: end.jd,
        converged: start.converged && end.converged,
    })
}

/// Classify the Yoga at an instant, with boundaries.
pub fn yoga_at<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    names: &NameProfile,
    config: &SolverConfig,
) -> Result<ElementState, PanchangError> {
    let (sum, _) = longitude_sum_sample(eph, jd_ut)?;
    let pos = yoga_from_sum(sum);
    let metric = |t: f64| longitude_sum_sample(eph, t);

    let start = solve_crossing(&metric, jd_ut, (pos.index - 1) as f64 * YOGA_SPAN_DEG, config)?;
    let end = solve_crossing(&metric, jd_ut, pos.index as f64 * YOGA_SPAN_DEG, config)?;

    Ok(ElementState {
        index: pos.index,
        name: names.yoga[pos.index as usize - 1],
        start_jd: start.jd,
        end_jd: end.jd,
        converged: start.converged && end.converged,
    })
}

/// Classify the Moon's Nakshatra at an instant, with boundaries.
///
/// Boundaries come from the ephemeris's own longitude-crossing search
/// rather than the generic solver.
pub fn nakshatra_at<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    names: &NameProfile,
) -> Result<ElementState, PanchangError> {
    let (lon, _) = moon_longitude_sample(eph, jd_ut)?;
    let pos = nakshatra_from_longitude(lon);

    let start_target = (pos.index - 1) as f64 * NAKSHATRA_SPAN_DEG;
    let end_target = pos.index as f64 * NAKSHATRA_SPAN_DEG;
    let start_jd = eph.search_crossing(Body::Moon, start_target, jd_ut, Frame::Sidereal)?;
    let end_jd = eph.search_crossing(Body::Moon, end_target, jd_ut, Frame::Sidereal)?;

    Ok(ElementState {
        index: pos.index,
        name: names.nakshatra[pos.index as usize - 1],
        start_jd,
        end_jd,
        converged: true,
    })
}

/// Classify the Moon's Rashi (sign) at an instant, with boundaries.
pub fn rashi_at<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    names: &NameProfile,
) -> Result<ElementState, PanchangError> {
    let (lon, _) = moon_longitude_sample(eph, jd_ut)?;
    let pos = rashi_from_longitude(lon);

    let start_target = (pos.index - 1) as f64 * RASHI_SPAN_DEG;
    let end_target = pos.index as f64 * RASHI_SPAN_DEG;
    let start_jd = eph.search_crossing(Body::Moon, start_target, jd_ut, Frame::Sidereal)?;
    let end_jd = eph.search_crossing(Body::Moon, end_target, jd_ut, Frame::Sidereal)?;

    Ok(ElementState {
        index: pos.index,
        name: names.rashi[pos.index as usize - 1],
        start_jd,
        end_jd,
        converged: true,
    })
}
