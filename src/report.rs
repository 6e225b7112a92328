use std::fmt::Write;

use chrono::NaiveDate;

use crate::error::AttendanceError;
use crate::models::{AttendanceResult, BatchEntry, Threshold};

pub fn describe_result(result: &AttendanceResult, threshold: Threshold) -> String {
    let percent = threshold.percent();
    if result.feasible {
        format!(
            "You can safely bunk approximately {} more full day(s) and still maintain {}% attendance \
             for the semester (assuming you attend all other remaining lectures).",
            result.safe_bunk_days, percent
        )
    } else {
        format!(
            "Unfortunately, even if you attend all remaining {} lectures, you cannot reach {}% attendance. \
             You need {} lectures in total, but can at most attend {}.",
            result.remaining_lectures, percent, result.required_lectures, result.max_possible_attendance
        )
    }
}

pub fn describe_error(error: &AttendanceError) -> String {
    match error {
        AttendanceError::InvalidInput { .. } => {
            format!("Invalid input: {error}. All fields must be valid positive numbers.")
        }
        AttendanceError::DaysExceedTotal { .. } => {
            "Days passed cannot exceed total working days.".to_string()
        }
        AttendanceError::AttendanceExceedsScheduled {
            scheduled,
            days_passed,
            ..
        } => format!(
            "You can't attend more than {scheduled} lectures if only {days_passed} days have passed."
        ),
        AttendanceError::InvalidThreshold { .. } => format!("Invalid configuration: {error}."),
    }
}

pub struct BatchSummary<'a> {
    pub feasible: Vec<(&'a BatchEntry, &'a AttendanceResult)>,
    pub at_risk: Vec<(&'a BatchEntry, &'a AttendanceResult)>,
    pub invalid: Vec<(&'a BatchEntry, &'a AttendanceError)>,
}

pub fn summarize(entries: &[BatchEntry]) -> BatchSummary<'_> {
    let mut summary = BatchSummary {
        feasible: Vec::new(),
        at_risk: Vec::new(),
        invalid: Vec::new(),
    };

    for entry in entries {
        match &entry.outcome {
            Ok(result) if result.feasible => summary.feasible.push((entry, result)),
            Ok(result) => summary.at_risk.push((entry, result)),
            Err(err) => summary.invalid.push((entry, err)),
        }
    }

    summary.feasible.sort_by(|a, b| {
        b.1.safe_bunk_days
            .cmp(&a.1.safe_bunk_days)
            .then_with(|| a.0.student.cmp(&b.0.student))
    });
    summary
        .at_risk
        .sort_by(|a, b| b.1.shortfall().cmp(&a.1.shortfall()));
    summary
}

pub fn build_report(
    label: Option<&str>,
    generated_on: NaiveDate,
    threshold: Threshold,
    entries: &[BatchEntry],
) -> String {
    let summary = summarize(entries);
    let percent = threshold.percent();

    let mut output = String::new();
    let label = label.unwrap_or("all students");

    let _ = writeln!(output, "# Attendance Bunk Report");
    let _ = writeln!(
        output,
        "Generated for {} on {} ({}% attendance threshold)",
        label, generated_on, percent
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Summary");
    let _ = writeln!(output, "- Students evaluated: {}", entries.len());
    let _ = writeln!(output, "- Can still bunk safely: {}", summary.feasible.len());
    let _ = writeln!(output, "- Cannot reach {}%: {}", percent, summary.at_risk.len());
    let _ = writeln!(output, "- Rows needing correction: {}", summary.invalid.len());

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Room to Bunk");

    let no_valid_rows = summary.feasible.is_empty() && summary.at_risk.is_empty();

    if no_valid_rows {
        let _ = writeln!(output, "No valid rows to evaluate.");
    } else if summary.feasible.is_empty() {
        let _ = writeln!(output, "No students can reach the threshold.");
    } else {
        for (entry, result) in summary.feasible.iter().take(10) {
            let _ = writeln!(
                output,
                "- {}: {} full day(s) ({} lectures of slack, needs {} of {})",
                entry.student,
                result.safe_bunk_days,
                result.affordable_slack,
                result.required_lectures,
                result.total_lectures
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Cannot Reach Threshold");

    if no_valid_rows {
        let _ = writeln!(output, "No valid rows to evaluate.");
    } else if summary.at_risk.is_empty() {
        let _ = writeln!(output, "Every valid student can still reach {}%.", percent);
    } else {
        for (entry, result) in summary.at_risk.iter() {
            let _ = writeln!(
                output,
                "- {}: needs {}, can reach at most {} (short by {})",
                entry.student,
                result.required_lectures,
                result.max_possible_attendance,
                result.shortfall()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Rows Needing Correction");

    if summary.invalid.is_empty() {
        let _ = writeln!(output, "All rows were valid.");
    } else {
        for (entry, err) in summary.invalid.iter() {
            let _ = writeln!(output, "- line {} ({}): {}", entry.line, entry.student, err);
        }
    }

    output
}
