use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::calculator;
use crate::models::{BatchEntry, RawQuery, Threshold};

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    student: Option<String>,
    total_working_days: Option<String>,
    lectures_per_day: Option<String>,
    lectures_attended: Option<String>,
    days_passed: Option<String>,
}

impl CsvRow {
    fn into_parts(self) -> (Option<String>, RawQuery) {
        let query = RawQuery {
            total_working_days: self.total_working_days,
            lectures_per_day: self.lectures_per_day,
            lectures_attended: self.lectures_attended,
            days_passed: self.days_passed,
        };
        (self.student, query)
    }
}

pub fn evaluate_csv(csv_path: &Path, threshold: Threshold) -> anyhow::Result<Vec<BatchEntry>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    evaluate_reader(file, threshold).with_context(|| format!("failed to read {}", csv_path.display()))
}

pub fn evaluate_reader<R: Read>(input: R, threshold: Threshold) -> anyhow::Result<Vec<BatchEntry>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut entries = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 1;
        let row = result.with_context(|| format!("malformed CSV record {line}"))?;
        let (student, query) = row.into_parts();
        let student = student
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("row {line}"));

        let outcome = calculator::evaluate_raw(&query, threshold);
        match &outcome {
            Ok(result) => debug!(
                line,
                student = %student,
                feasible = result.feasible,
                safe_bunk_days = result.safe_bunk_days,
                "evaluated row"
            ),
            Err(err) => warn!(line, student = %student, error = %err, "rejected row"),
        }

        entries.push(BatchEntry {
            line,
            student,
            outcome,
        });
    }

    Ok(entries)
}
