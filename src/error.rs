use std::fmt;

use thiserror::Error;

/// One of the four inputs an attendance query is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    TotalWorkingDays,
    LecturesPerDay,
    LecturesAttended,
    DaysPassed,
}

impl QueryField {
    pub fn label(self) -> &'static str {
        match self {
            QueryField::TotalWorkingDays => "total working days",
            QueryField::LecturesPerDay => "lectures per day",
            QueryField::LecturesAttended => "lectures attended so far",
            QueryField::DaysPassed => "working days passed so far",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputProblem {
    #[error("is missing")]
    Missing,
    #[error("is not a whole number ({0:?})")]
    NotANumber(String),
    #[error("must be positive (got {0})")]
    NotPositive(String),
    #[error("must not be negative (got {0})")]
    Negative(String),
    #[error("is too large (got {0})")]
    TooLarge(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("{field} {problem}")]
    InvalidInput {
        field: QueryField,
        problem: InputProblem,
    },
    #[error("days passed ({days_passed}) cannot exceed total working days ({total_working_days})")]
    DaysExceedTotal {
        days_passed: u32,
        total_working_days: u32,
    },
    #[error(
        "lectures attended ({attended}) cannot exceed the {scheduled} lectures scheduled in {days_passed} days"
    )]
    AttendanceExceedsScheduled {
        attended: u32,
        scheduled: u64,
        days_passed: u32,
    },
    #[error("attendance threshold must be between 1 and 100 percent (got {percent})")]
    InvalidThreshold { percent: i64 },
}

impl AttendanceError {
    pub(crate) fn invalid(field: QueryField, problem: InputProblem) -> Self {
        AttendanceError::InvalidInput { field, problem }
    }

    /// Short machine-readable name for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            AttendanceError::InvalidInput { .. } => "invalid_input",
            AttendanceError::DaysExceedTotal { .. } => "days_exceed_total",
            AttendanceError::AttendanceExceedsScheduled { .. } => "attendance_exceeds_scheduled",
            AttendanceError::InvalidThreshold { .. } => "invalid_threshold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_the_field() {
        let err = AttendanceError::invalid(
            QueryField::LecturesPerDay,
            InputProblem::NotPositive("0".to_string()),
        );
        assert_eq!(err.to_string(), "lectures per day must be positive (got 0)");
        assert_eq!(err.kind(), "invalid_input");
    }

    #[test]
    fn exceeds_scheduled_message_carries_bound() {
        let err = AttendanceError::AttendanceExceedsScheduled {
            attended: 41,
            scheduled: 40,
            days_passed: 10,
        };
        assert!(err.to_string().contains("40 lectures scheduled in 10 days"));
    }
}
