use std::num::IntErrorKind;

use serde::Serialize;

use crate::error::{AttendanceError, InputProblem, QueryField};

pub const DEFAULT_THRESHOLD_PERCENT: u32 = 75;

/// Minimum share of scheduled lectures a student must attend, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    percent: u32,
}

impl Threshold {
    pub fn new(percent: i64) -> Result<Self, AttendanceError> {
        match u32::try_from(percent) {
            Ok(value @ 1..=100) => Ok(Self { percent: value }),
            _ => Err(AttendanceError::InvalidThreshold { percent }),
        }
    }

    pub fn percent(self) -> u32 {
        self.percent
    }

    /// Smallest lecture count that meets the threshold. Rounds up.
    pub fn required_of(self, total_lectures: u64) -> u64 {
        let scaled = u128::from(total_lectures) * u128::from(self.percent);
        u64::try_from(scaled.div_ceil(100)).unwrap_or(total_lectures)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            percent: DEFAULT_THRESHOLD_PERCENT,
        }
    }
}

/// A validated attendance query. Only constructible through validation, so
/// days passed never exceed the term and attendance never exceeds what was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceQuery {
    total_working_days: u32,
    lectures_per_day: u32,
    lectures_attended: u32,
    days_passed: u32,
}

impl AttendanceQuery {
    pub fn new(
        total_working_days: i64,
        lectures_per_day: i64,
        lectures_attended: i64,
        days_passed: i64,
    ) -> Result<Self, AttendanceError> {
        Self::validate(
            Count::from(total_working_days),
            Count::from(lectures_per_day),
            Count::from(lectures_attended),
            Count::from(days_passed),
        )
    }

    fn validate(
        total_working_days: Count,
        lectures_per_day: Count,
        lectures_attended: Count,
        days_passed: Count,
    ) -> Result<Self, AttendanceError> {
        let total_working_days = positive(QueryField::TotalWorkingDays, total_working_days)?;
        let lectures_per_day = positive(QueryField::LecturesPerDay, lectures_per_day)?;
        let lectures_attended = non_negative(QueryField::LecturesAttended, lectures_attended)?;
        let days_passed = non_negative(QueryField::DaysPassed, days_passed)?;

        if days_passed > total_working_days {
            return Err(AttendanceError::DaysExceedTotal {
                days_passed,
                total_working_days,
            });
        }

        let scheduled = u64::from(days_passed) * u64::from(lectures_per_day);
        if u64::from(lectures_attended) > scheduled {
            return Err(AttendanceError::AttendanceExceedsScheduled {
                attended: lectures_attended,
                scheduled,
                days_passed,
            });
        }

        Ok(Self {
            total_working_days,
            lectures_per_day,
            lectures_attended,
            days_passed,
        })
    }

    pub fn total_working_days(&self) -> u32 {
        self.total_working_days
    }

    pub fn lectures_per_day(&self) -> u32 {
        self.lectures_per_day
    }

    pub fn lectures_attended(&self) -> u32 {
        self.lectures_attended
    }

    pub fn days_passed(&self) -> u32 {
        self.days_passed
    }

    pub fn scheduled_so_far(&self) -> u64 {
        u64::from(self.days_passed) * u64::from(self.lectures_per_day)
    }
}

/// A field value saturated to `i64`, with the text it was read from.
struct Count {
    value: i64,
    text: String,
}

impl From<i64> for Count {
    fn from(value: i64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }
}

fn positive(field: QueryField, count: Count) -> Result<u32, AttendanceError> {
    if count.value <= 0 {
        return Err(AttendanceError::invalid(field, InputProblem::NotPositive(count.text)));
    }
    u32::try_from(count.value)
        .map_err(|_| AttendanceError::invalid(field, InputProblem::TooLarge(count.text)))
}

fn non_negative(field: QueryField, count: Count) -> Result<u32, AttendanceError> {
    if count.value < 0 {
        return Err(AttendanceError::invalid(field, InputProblem::Negative(count.text)));
    }
    u32::try_from(count.value)
        .map_err(|_| AttendanceError::invalid(field, InputProblem::TooLarge(count.text)))
}

/// Query fields as typed by a user or read from a CSV cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub total_working_days: Option<String>,
    pub lectures_per_day: Option<String>,
    pub lectures_attended: Option<String>,
    pub days_passed: Option<String>,
}

impl RawQuery {
    pub fn new(
        total_working_days: impl Into<String>,
        lectures_per_day: impl Into<String>,
        lectures_attended: impl Into<String>,
        days_passed: impl Into<String>,
    ) -> Self {
        Self {
            total_working_days: Some(total_working_days.into()),
            lectures_per_day: Some(lectures_per_day.into()),
            lectures_attended: Some(lectures_attended.into()),
            days_passed: Some(days_passed.into()),
        }
    }

    /// Parses every field before any sign or range check runs.
    pub fn parse(&self) -> Result<AttendanceQuery, AttendanceError> {
        let total = parse_field(QueryField::TotalWorkingDays, self.total_working_days.as_deref())?;
        let per_day = parse_field(QueryField::LecturesPerDay, self.lectures_per_day.as_deref())?;
        let attended = parse_field(QueryField::LecturesAttended, self.lectures_attended.as_deref())?;
        let passed = parse_field(QueryField::DaysPassed, self.days_passed.as_deref())?;
        AttendanceQuery::validate(total, per_day, attended, passed)
    }
}

/// Out-of-range whole numbers saturate so the range checks can name them.
fn parse_field(field: QueryField, value: Option<&str>) -> Result<Count, AttendanceError> {
    let text = value.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(AttendanceError::invalid(field, InputProblem::Missing));
    }
    let value = match text.parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(AttendanceError::invalid(
                    field,
                    InputProblem::NotANumber(text.to_string()),
                ))
            }
        },
    };
    Ok(Count {
        value,
        text: text.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceResult {
    pub feasible: bool,
    pub safe_bunk_days: u64,
    pub required_lectures: u64,
    pub max_possible_attendance: u64,
    pub total_lectures: u64,
    pub remaining_lectures: u64,
    pub affordable_slack: u64,
}

impl AttendanceResult {
    /// Lectures missing from the best case. Zero when feasible.
    pub fn shortfall(&self) -> u64 {
        self.required_lectures.saturating_sub(self.max_possible_attendance)
    }
}

#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub line: usize,
    pub student: String,
    pub outcome: Result<AttendanceResult, AttendanceError>,
}
