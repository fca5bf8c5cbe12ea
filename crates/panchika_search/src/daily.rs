//! Daily and monthly panchang aggregation.
//!
//! One [`DailyRecord`] per civil day: weekday, the five classified
//! elements with their end times in local clock terms, and
//! sunrise/sunset. An element whose boundary falls beyond the civil day
//! is reported with the spill sentinel instead of a clock time; an
//! element the ephemeris cannot resolve is reported as absent rather
//! than failing the record.

use panchika_base::{NameProfile, Vaar, vaar_from_jd};
use panchika_eph::{Body, Ephemeris, GeoLocation, HorizonEvent};
use panchika_time::{
    CivilDate, TimeError, calendar_to_jd, days_in_month, jd_ut_to_local_hm, local_midnight_jd_ut,
};

use crate::elements::{ElementState, karana_at, nakshatra_at, rashi_at, tithi_at, yoga_at};
use crate::error::PanchangError;
use crate::solver::DAILY_SWEEP;

/// Observer location plus fixed UTC offset for local clock times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub location: GeoLocation,
    /// East-positive UTC offset in hours (e.g. 5.75 for Nepal).
    pub tz_offset_hours: f64,
}

impl Place {
    pub fn new(location: GeoLocation, tz_offset_hours: f64) -> Self {
        Self {
            location,
            tz_offset_hours,
        }
    }
}

/// A time-of-day field of a daily record.
///
/// `SpillsOver` and `Unavailable` are sentinels, not times; callers
/// must not do clock arithmetic on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBoundary {
    /// Local clock time within the civil day.
    At { hour: u32, minute: u32 },
    /// The boundary falls outside this civil day.
    SpillsOver,
    /// The event does not occur or could not be resolved.
    Unavailable,
}

impl std::fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::At { hour, minute } => write!(f, "{hour:02}:{minute:02}"),
            Self::SpillsOver => write!(f, "extends past this day"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// One classified element as it appears in a daily record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayElement {
    /// Element index (see [`ElementState`] for per-element numbering).
    pub index: u8,
    /// Display name in the requested language profile.
    pub name: &'static str,
    /// Local time the element ends, or a sentinel.
    pub ends: DayBoundary,
}

/// The assembled panchang for one civil day.
///
/// Element fields are `None` when an ephemeris error prevented that
/// classification; the rest of the record is still produced.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: CivilDate,
    pub vaar: Vaar,
    pub weekday_name: &'static str,
    pub tithi: Option<DayElement>,
    pub nakshatra: Option<DayElement>,
    pub rashi: Option<DayElement>,
    pub yoga: Option<DayElement>,
    pub karana: Option<DayElement>,
    pub sunrise: DayBoundary,
    pub sunset: DayBoundary,
}

/// A day dropped from a monthly sweep, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDay {
    pub day: u32,
    pub error: PanchangError,
}

/// Result of a monthly sweep: records in date order plus any days
/// that had to be skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRecords {
    pub records: Vec<DailyRecord>,
    pub skipped: Vec<SkippedDay>,
}

/// Convert an element end instant to a record field, applying the
/// spill rule: a boundary past local midnight + 1 day — or before
/// midnight, when `reject_past` is set — reports the sentinel.
fn end_boundary(
    end_jd: f64,
    midnight_jd: f64,
    tz_offset_hours: f64,
    reject_past: bool,
) -> DayBoundary {
    if end_jd > midnight_jd + 1.0 || (reject_past && end_jd < midnight_jd) {
        return DayBoundary::SpillsOver;
    }
    let (_, hour, minute) = jd_ut_to_local_hm(end_jd, tz_offset_hours);
    DayBoundary::At { hour, minute }
}

/// Absorb an ephemeris failure into an absent field; anything else
/// still propagates.
fn element_field(
    result: Result<ElementState, PanchangError>,
    midnight_jd: f64,
    tz_offset_hours: f64,
    reject_past: bool,
) -> Result<Option<DayElement>, PanchangError> {
    match result {
        Ok(state) => Ok(Some(DayElement {
            index: state.index,
            name: state.name,
            ends: end_boundary(state.end_jd, midnight_jd, tz_offset_hours, reject_past),
        })),
        Err(PanchangError::Ephemeris(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Build the panchang record for one civil day at a place.
pub fn build_daily_record<E: Ephemeris + ?Sized>(
    eph: &E,
    date: CivilDate,
    place: &Place,
    names: &NameProfile,
) -> Result<DailyRecord, PanchangError> {
    let midnight = local_midnight_jd_ut(date, place.tz_offset_hours);
    let tz = place.tz_offset_hours;

    // Weekday of the civil date itself, not of the UT instant.
    let vaar = vaar_from_jd(calendar_to_jd(date.year, date.month, date.day as f64 + 0.5));

    // The daily sweep uses the coarse two-iteration budget: boundary
    // times land within a minute, which is all a per-day table shows.
    let tithi = element_field(tithi_at(eph, midnight, names, &DAILY_SWEEP), midnight, tz, false)?;
    let karana = element_field(
        karana_at(eph, midnight, names, &DAILY_SWEEP),
        midnight,
        tz,
        false,
    )?;
    let yoga = element_field(yoga_at(eph, midnight, names, &DAILY_SWEEP), midnight, tz, false)?;
    // The direct crossing search can land on the previous cycle's
    // boundary; a result before midnight is a spill, not a clock time.
    let nakshatra = element_field(nakshatra_at(eph, midnight, names), midnight, tz, true)?;
    let rashi = element_field(rashi_at(eph, midnight, names), midnight, tz, true)?;

    let sunrise = horizon_field(eph, midnight + 0.5, HorizonEvent::Rise, place);
    let sunset = horizon_field(eph, midnight + 0.5, HorizonEvent::Set, place);

    Ok(DailyRecord {
        date,
        vaar,
        weekday_name: names.vaar_name(vaar),
        tithi,
        nakshatra,
        rashi,
        yoga,
        karana,
        sunrise,
        sunset,
    })
}

/// Resolve a solar horizon event to a record field. Absence (polar
/// day/night) and query failure both read as unavailable.
fn horizon_field<E: Ephemeris + ?Sized>(
    eph: &E,
    jd_ut: f64,
    event: HorizonEvent,
    place: &Place,
) -> DayBoundary {
    match eph.search_horizon_event(jd_ut, Body::Sun, event, &place.location) {
        Ok(Some(jd)) => {
            let (_, hour, minute) = jd_ut_to_local_hm(jd, place.tz_offset_hours);
            DayBoundary::At { hour, minute }
        }
        Ok(None) | Err(_) => DayBoundary::Unavailable,
    }
}

/// Build records for every day of a Gregorian month, in date order.
///
/// A day whose civil date cannot be converted is reported in
/// `skipped` and does not abort the rest of the month.
pub fn build_month<E: Ephemeris + ?Sized>(
    eph: &E,
    month: u32,
    year: i32,
    place: &Place,
    names: &NameProfile,
) -> Result<MonthRecords, PanchangError> {
    let len = days_in_month(month, year);
    if len == 0 {
        return Err(PanchangError::Time(TimeError::InvalidDate {
            year,
            month,
            day: 1,
        }));
    }

    let mut records = Vec::with_capacity(len as usize);
    let mut skipped = Vec::new();
    for day in 1..=len {
        let date = match CivilDate::new(year, month, day) {
            Ok(d) => d,
            Err(e) => {
                skipped.push(SkippedDay {
                    day,
                    error: e.into(),
                });
                continue;
            }
        };
        match build_daily_record(eph, date, place, names) {
            Ok(record) => records.push(record),
            Err(error) => skipped.push(SkippedDay { day, error }),
        }
    }
    Ok(MonthRecords { records, skipped })
}
