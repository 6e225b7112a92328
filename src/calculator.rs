use crate::error::AttendanceError;
use crate::models::{AttendanceQuery, AttendanceResult, RawQuery, Threshold};

/// Evaluates a query against the default 75% threshold.
pub fn evaluate(query: &AttendanceQuery) -> AttendanceResult {
    evaluate_with(query, Threshold::default())
}

pub fn evaluate_with(query: &AttendanceQuery, threshold: Threshold) -> AttendanceResult {
    let per_day = u64::from(query.lectures_per_day());
    let total_lectures = u64::from(query.total_working_days()) * per_day;
    let required_lectures = threshold.required_of(total_lectures);

    let days_left = u64::from(query.total_working_days() - query.days_passed());
    let remaining_lectures = days_left * per_day;
    let max_possible_attendance = u64::from(query.lectures_attended()) + remaining_lectures;

    if max_possible_attendance < required_lectures {
        return AttendanceResult {
            feasible: false,
            safe_bunk_days: 0,
            required_lectures,
            max_possible_attendance,
            total_lectures,
            remaining_lectures,
            affordable_slack: 0,
        };
    }

    let affordable_slack = max_possible_attendance - required_lectures;
    AttendanceResult {
        feasible: true,
        safe_bunk_days: affordable_slack / per_day,
        required_lectures,
        max_possible_attendance,
        total_lectures,
        remaining_lectures,
        affordable_slack,
    }
}

/// Validates untrusted text fields and evaluates them in one step.
pub fn evaluate_raw(raw: &RawQuery, threshold: Threshold) -> Result<AttendanceResult, AttendanceError> {
    let query = raw.parse()?;
    Ok(evaluate_with(&query, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(total: i64, per_day: i64, attended: i64, passed: i64) -> AttendanceQuery {
        AttendanceQuery::new(total, per_day, attended, passed).expect("valid query")
    }

    #[test]
    fn comfortable_student_can_bunk_whole_days_only() {
        let result = evaluate(&query(90, 4, 120, 45));
        assert_eq!(result.total_lectures, 360);
        assert_eq!(result.required_lectures, 270);
        assert_eq!(result.remaining_lectures, 180);
        assert_eq!(result.max_possible_attendance, 300);
        assert!(result.feasible);
        assert_eq!(result.affordable_slack, 30);
        assert_eq!(result.safe_bunk_days, 7);
    }

    #[test]
    fn unreachable_threshold_is_a_result_not_an_error() {
        let result = evaluate(&query(90, 4, 50, 45));
        assert_eq!(result.required_lectures, 270);
        assert_eq!(result.remaining_lectures, 180);
        assert_eq!(result.max_possible_attendance, 230);
        assert!(!result.feasible);
        assert_eq!(result.safe_bunk_days, 0);
        assert_eq!(result.shortfall(), 40);
    }

    #[test]
    fn days_beyond_term_are_rejected() {
        let err = AttendanceQuery::new(45, 4, 10, 50).unwrap_err();
        assert_eq!(
            err,
            AttendanceError::DaysExceedTotal {
                days_passed: 50,
                total_working_days: 45,
            }
        );
    }

    #[test]
    fn attending_more_than_scheduled_is_rejected() {
        let err = AttendanceQuery::new(90, 4, 41, 10).unwrap_err();
        assert_eq!(
            err,
            AttendanceError::AttendanceExceedsScheduled {
                attended: 41,
                scheduled: 40,
                days_passed: 10,
            }
        );
    }

    #[test]
    fn exactly_on_the_line_is_feasible_with_no_bunks() {
        // 100 lectures, 75 required; 50 attended + 25 remaining = 75.
        let result = evaluate(&query(20, 5, 50, 15));
        assert!(result.feasible);
        assert_eq!(result.affordable_slack, 0);
        assert_eq!(result.safe_bunk_days, 0);
    }

    #[test]
    fn finished_term_has_no_remaining_lectures() {
        let result = evaluate(&query(10, 3, 25, 10));
        assert_eq!(result.remaining_lectures, 0);
        assert_eq!(result.max_possible_attendance, 25);
        assert!(result.feasible);
        assert_eq!(result.safe_bunk_days, 0);
    }

    #[test]
    fn fresh_term_allows_a_quarter_of_days() {
        let result = evaluate(&query(100, 6, 0, 0));
        assert_eq!(result.required_lectures, 450);
        assert_eq!(result.safe_bunk_days, 25);
    }

    #[test]
    fn custom_threshold_changes_requirement() {
        let q = query(90, 4, 120, 45);
        let strict = evaluate_with(&q, Threshold::new(80).unwrap());
        assert_eq!(strict.required_lectures, 288);
        assert_eq!(strict.safe_bunk_days, 3);
        assert_eq!(evaluate_with(&q, Threshold::default()), evaluate(&q));
    }

    #[test]
    fn values_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttendanceQuery>();
        assert_send_sync::<AttendanceResult>();
        assert_send_sync::<Threshold>();
        assert_send_sync::<AttendanceError>();
    }

    #[test]
    fn raw_evaluation_surfaces_parse_errors() {
        let raw = RawQuery::new("ninety", "4", "120", "45");
        let err = evaluate_raw(&raw, Threshold::default()).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");

        let ok = evaluate_raw(&RawQuery::new("90", "4", "120", "45"), Threshold::default()).unwrap();
        assert_eq!(ok.safe_bunk_days, 7);
    }
}
