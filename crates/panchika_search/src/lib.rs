//! Panchang element search and aggregation.
//!
//! The solver in [`solver`] finds the instant a monotone angular
//! metric crosses a target value. [`elements`] applies it to the five
//! classified panchang elements, and [`daily`] assembles per-day and
//! per-month records with local clock times.

pub mod daily;
pub mod elements;
pub mod error;
pub mod solver;

pub use daily::{
    DailyRecord, DayBoundary, DayElement, MonthRecords, Place, SkippedDay, build_daily_record,
    build_month,
};
pub use elements::{ElementState, karana_at, nakshatra_at, rashi_at, tithi_at, yoga_at};
pub use error::PanchangError;
pub use solver::{Crossing, DAILY_SWEEP, PRECISE, SolverConfig, solve_crossing};
