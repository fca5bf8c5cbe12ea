//! Generic angular-crossing solver.
//!
//! Finds the instant at which a scalar angular quantity reaches a
//! target value, given only point samples of angle and angular rate.
//! The lunar-phase and Sun+Moon-sum boundary searches both go through
//! this one routine; the metric closure decides what is being tracked.

use panchika_base::normalize_to_pm180;

/// Iteration and precision budget for one crossing search.
///
/// The two call sites have different budgets on purpose: tightening one
/// must not silently change the precision guarantees of the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum correction steps after the initial linear estimate.
    pub max_iterations: u32,
    /// Early-out threshold on the wrapped angular gap, in degrees.
    pub tolerance_deg: f64,
}

/// Coarse budget for day-by-day monthly sweeps.
pub const DAILY_SWEEP: SolverConfig = SolverConfig {
    max_iterations: 2,
    tolerance_deg: 1e-3,
};

/// Precise budget for single-instant queries.
pub const PRECISE: SolverConfig = SolverConfig {
    max_iterations: 5,
    tolerance_deg: 1e-3,
};

/// Result of a crossing search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Best estimate of the crossing instant (JD, UT).
    pub jd: f64,
    /// Whether the wrapped gap fell under tolerance within the budget.
    /// A `false` here flags the known imprecision risk near angular-rate
    /// anomalies (lunar apogee/perigee); the estimate is still the best
    /// available and is returned rather than an error.
    pub converged: bool,
}

/// Solve `metric(t).angle == target_deg` by linearized Newton iteration
/// over the periodic domain.
///
/// `metric` returns `(angle_deg, rate_deg_per_day)` at an instant. The
/// gap is always wrapped to (-180, 180], so the solver heads for the
/// nearest crossing, forward or backward. A zero rate skips that
/// correction step instead of dividing; the iteration budget still
/// terminates. Deterministic for identical samples.
pub fn solve_crossing<E>(
    metric: impl Fn(f64) -> Result<(f64, f64), E>,
    start_jd: f64,
    target_deg: f64,
    config: &SolverConfig,
) -> Result<Crossing, E> {
    let (angle, rate) = metric(start_jd)?;
    let gap = normalize_to_pm180(target_deg - angle);
    if gap.abs() < config.tolerance_deg {
        return Ok(Crossing {
            jd: start_jd,
            converged: true,
        });
    }

    // First estimate: linear extrapolation at the starting rate.
    let mut jd = if rate != 0.0 {
        start_jd + gap / rate
    } else {
        start_jd
    };

    let mut converged = false;
    for _ in 0..config.max_iterations {
        let (angle, rate) = metric(jd)?;
        let gap = normalize_to_pm180(target_deg - angle);
        if gap.abs() < config.tolerance_deg {
            converged = true;
            break;
        }
        if rate != 0.0 {
            jd += gap / rate;
        }
    }

    Ok(Crossing { jd, converged })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Body advancing linearly from `lon0` at `rate` deg/day.
    fn linear(lon0: f64, rate: f64) -> impl Fn(f64) -> Result<(f64, f64), Infallible> {
        move |jd: f64| Ok(((lon0 + rate * jd).rem_euclid(360.0), rate))
    }

    #[test]
    fn linear_crossing_exact() {
        // Body A fixed at 0, body B at 13 deg/day from 0: the 12-degree
        // separation is reached at t = 12/13 days.
        let metric = linear(0.0, 13.0);
        let c = solve_crossing(metric, 0.0, 12.0, &PRECISE).unwrap();
        assert!(c.converged);
        assert!((c.jd - 12.0 / 13.0).abs() < 1e-3 / 13.0, "jd={}", c.jd);
    }

    #[test]
    fn idempotent_near_fixed_point() {
        let metric = linear(40.0, 12.19);
        let first = solve_crossing(&metric, 100.0, 300.0, &PRECISE).unwrap();
        let again = solve_crossing(&metric, first.jd, 300.0, &PRECISE).unwrap();
        // Restarting from a converged solution stays within tolerance.
        assert!((again.jd - first.jd).abs() * 12.19 < PRECISE.tolerance_deg);
    }

    #[test]
    fn backward_crossing() {
        // Target just behind the current angle: nearest crossing is in
        // the past, so the solver steps backward.
        let metric = linear(10.0, 13.0);
        let c = solve_crossing(metric, 1.0, 12.0, &PRECISE).unwrap();
        assert!(c.jd < 1.0);
        // 10 + 13t = 12 crosses at t = 2/13.
        assert!((c.jd - 2.0 / 13.0).abs() < 1e-3, "jd={}", c.jd);
    }

    #[test]
    fn wrapped_target() {
        // From 350 deg toward 10 deg: gap is +20, not -340.
        let metric = linear(350.0, 10.0);
        let c = solve_crossing(metric, 0.0, 10.0, &PRECISE).unwrap();
        assert!((c.jd - 2.0).abs() < 1e-3, "jd={}", c.jd);
    }

    #[test]
    fn zero_rate_terminates_unconverged() {
        let metric = |_jd: f64| -> Result<(f64, f64), Infallible> { Ok((0.0, 0.0)) };
        let c = solve_crossing(metric, 5.0, 90.0, &PRECISE).unwrap();
        // No correction possible: the estimate is left at the start.
        assert_eq!(c.jd, 5.0);
        assert!(!c.converged);
    }

    #[test]
    fn budget_exhaustion_returns_best_effort() {
        // A rate that is wrong by 2x everywhere: each step halves the
        // gap, so two iterations cannot reach 1e-3 from 90 degrees.
        let metric = |jd: f64| -> Result<(f64, f64), Infallible> {
            Ok(((10.0 * jd).rem_euclid(360.0), 20.0))
        };
        let c = solve_crossing(metric, 0.0, 90.0, &DAILY_SWEEP).unwrap();
        assert!(!c.converged);
        // Still closer than the starting point.
        let (angle, _) = metric(c.jd).unwrap();
        assert!(normalize_to_pm180(90.0 - angle).abs() < 90.0);
    }

    #[test]
    fn already_at_target() {
        let metric = linear(42.0, 13.0);
        let c = solve_crossing(metric, 0.0, 42.0, &DAILY_SWEEP).unwrap();
        assert!(c.converged);
        assert_eq!(c.jd, 0.0);
    }
}
