//! Month assembly against the built-in analytic ephemeris.
//!
//! These assertions stay structural (counts, index ranges, ordering)
//! rather than pinning boundary minutes, which depend on the truncated
//! series' accuracy.

use panchika_base::{ALL_VAARS, Language, NameProfile, Vaar};
use panchika_eph::{AnalyticEphemeris, GeoLocation};
use panchika_search::{DayBoundary, Place, build_month};

fn kathmandu() -> Place {
    Place::new(GeoLocation::new(27.7172, 85.3240, 1400.0), 5.75)
}

#[test]
fn full_month_of_records() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::Sanskrit);
    let month = build_month(&eph, 1, 2024, &kathmandu(), names).unwrap();

    assert_eq!(month.records.len(), 31);
    assert!(month.skipped.is_empty(), "{:?}", month.skipped);

    for (i, rec) in month.records.iter().enumerate() {
        assert_eq!(rec.date.day, i as u32 + 1);
        let tithi = rec.tithi.as_ref().unwrap();
        assert!((1..=30).contains(&tithi.index), "day {}: {tithi:?}", rec.date.day);
        let nak = rec.nakshatra.as_ref().unwrap();
        assert!((1..=27).contains(&nak.index));
        let rashi = rec.rashi.as_ref().unwrap();
        assert!((1..=12).contains(&rashi.index));
        let yoga = rec.yoga.as_ref().unwrap();
        assert!((1..=27).contains(&yoga.index));
        assert!(rec.karana.as_ref().unwrap().index <= 59);
    }
}

#[test]
fn weekdays_rotate_through_the_month() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::English);
    let month = build_month(&eph, 1, 2024, &kathmandu(), names).unwrap();

    // 2024-01-01 was a Monday.
    assert_eq!(month.records[0].vaar, Vaar::Somavara);
    assert_eq!(month.records[0].weekday_name, "Monday");
    assert_eq!(month.records[6].vaar, Vaar::Ravivara);
    for pair in month.records.windows(2) {
        let a = pair[0].vaar.index() as usize;
        let b = pair[1].vaar.index() as usize;
        assert_eq!((a + 1) % 7, b);
    }
    // All seven weekdays occur in a 31-day month.
    for v in ALL_VAARS {
        assert!(month.records.iter().any(|r| r.vaar == v));
    }
}

#[test]
fn winter_sunrise_hours_at_kathmandu() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::Sanskrit);
    let month = build_month(&eph, 1, 2024, &kathmandu(), names).unwrap();

    for rec in &month.records {
        match rec.sunrise {
            DayBoundary::At { hour, .. } => {
                assert!((6..=7).contains(&hour), "day {}: {:?}", rec.date.day, rec.sunrise)
            }
            other => panic!("day {}: sunrise {other:?}", rec.date.day),
        }
        match rec.sunset {
            DayBoundary::At { hour, .. } => {
                assert!((16..=18).contains(&hour), "day {}: {:?}", rec.date.day, rec.sunset)
            }
            other => panic!("day {}: sunset {other:?}", rec.date.day),
        }
    }
}

#[test]
fn slow_elements_spill_and_fast_ones_mostly_end() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::Sanskrit);
    let month = build_month(&eph, 1, 2024, &kathmandu(), names).unwrap();

    // A rashi lasts ~2.3 days, so most days report the spill sentinel.
    let rashi_spills = month
        .records
        .iter()
        .filter(|r| r.rashi.as_ref().is_some_and(|e| e.ends == DayBoundary::SpillsOver))
        .count();
    assert!(rashi_spills >= 10, "{rashi_spills}");

    // A tithi lasts under ~1.1 days, so most days see it end on the day.
    let tithi_clocked = month
        .records
        .iter()
        .filter(|r| {
            r.tithi
                .as_ref()
                .is_some_and(|e| matches!(e.ends, DayBoundary::At { .. }))
        })
        .count();
    assert!(tithi_clocked >= 25, "{tithi_clocked}");
}

#[test]
fn polar_winter_reports_no_sun_events() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::Sanskrit);
    let arctic = Place::new(GeoLocation::new(80.0, 15.0, 0.0), 1.0);
    let month = build_month(&eph, 1, 2024, &arctic, names).unwrap();

    assert_eq!(month.records[0].sunrise, DayBoundary::Unavailable);
    assert_eq!(month.records[0].sunset, DayBoundary::Unavailable);
    // Lunar elements are unaffected by the horizon geometry.
    assert!(month.records[0].tithi.is_some());
}

#[test]
fn february_lengths_follow_the_calendar() {
    let eph = AnalyticEphemeris::new();
    let names = NameProfile::for_language(Language::Sanskrit);
    let leap = build_month(&eph, 2, 2024, &kathmandu(), names).unwrap();
    assert_eq!(leap.records.len(), 29);
    let common = build_month(&eph, 2, 2023, &kathmandu(), names).unwrap();
    assert_eq!(common.records.len(), 28);
}
