//! Attendance bunk calculator for College Buddy.
//!
//! Works out how many more full days a student can skip while still reaching
//! the attendance threshold, or reports that the threshold is out of reach.

pub mod advice;
pub mod calculator;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod report;

pub use calculator::{evaluate, evaluate_raw, evaluate_with};
pub use error::{AttendanceError, InputProblem, QueryField};
pub use models::{
    AttendanceQuery, AttendanceResult, BatchEntry, RawQuery, Threshold, DEFAULT_THRESHOLD_PERCENT,
};
