//! Gregorian calendar <-> Julian Day conversion.
//!
//! The Julian Day here is a plain `f64` in UT: day boundaries (civil
//! midnight at Greenwich) fall on half-integers, noon on integers.
//! No leap-second or TDB handling — the panchang pipeline runs entirely
//! in UT and treats the JD as an opaque continuous time value.

/// JD of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000: f64 = 2_451_545.0;

/// Convert a Gregorian calendar date to Julian Day (UT).
///
/// `day_frac` carries the time of day: `15.0` is midnight starting
/// day 15, `15.5` is noon. Valid for all dates of the proleptic
/// Gregorian calendar after 4716 BCE.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Day (UT) back to a Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` with the same day-fraction
/// convention as [`calendar_to_jd`].
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000).abs() < 1e-9);
    }

    #[test]
    fn j2000_midnight() {
        let jd = calendar_to_jd(2000, 1, 1.0);
        assert!((jd - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn known_epoch_1987() {
        // Meeus, Astronomical Algorithms: 1987-04-10.0 = JD 2446895.5
        let jd = calendar_to_jd(1987, 4, 10.0);
        assert!((jd - 2_446_895.5).abs() < 1e-9);
    }

    #[test]
    fn round_trip() {
        for &(y, m, d) in &[
            (2024, 1, 1.0),
            (2024, 2, 29.25),
            (1999, 12, 31.75),
            (1900, 3, 1.0),
            (2100, 7, 15.5),
        ] {
            let jd = calendar_to_jd(y, m, d);
            let (ry, rm, rd) = jd_to_calendar(jd);
            assert_eq!((ry, rm), (y, m), "date {y}-{m}-{d}");
            assert!((rd - d).abs() < 1e-6, "day_frac {rd} vs {d}");
        }
    }

    #[test]
    fn day_boundary_is_half_integer() {
        let jd = calendar_to_jd(2024, 6, 10.0);
        assert!((jd.fract().abs() - 0.5).abs() < 1e-12);
    }
}
