use crate::domain::dates::days_between;
use crate::domain::palette::{
    LABEL_COMPLETED, LABEL_DUE_TODAY, NEUTRAL, SUCCESS, status_style, urgency_colors,
};
use crate::types::{ClassificationResult, Task, TaskStatus, Urgency};
use chrono::NaiveDate;

/// Derives label, colors and urgency for a task.
///
/// Completed tasks are terminal no matter the deadline. For every other status
/// the deadline decides, so an `on_hold` task due today still reads as due
/// today. The status table is only consulted when there is no usable deadline.
pub fn classify(
    status: &TaskStatus,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ClassificationResult {
    if status.is_terminal() {
        return ClassificationResult {
            label: LABEL_COMPLETED.to_string(),
            colors: SUCCESS,
            urgency: Urgency::Terminal,
            remaining_days: None,
        };
    }

    let Some(end_date) = end_date else {
        return classify_without_deadline(status);
    };

    let remaining = days_between(today, end_date);
    let (label, urgency) = if remaining == 0 {
        (LABEL_DUE_TODAY.to_string(), Urgency::DueToday)
    } else if remaining < 0 {
        (
            format!("Terlambat selama {} hari", remaining.abs()),
            Urgency::Overdue,
        )
    } else {
        (format!("Tersisa {} hari", remaining), Urgency::Upcoming)
    };

    ClassificationResult {
        label,
        colors: urgency_colors(urgency),
        urgency,
        remaining_days: Some(remaining),
    }
}

pub fn classify_task(task: &Task, today: NaiveDate) -> ClassificationResult {
    classify(&task.status, task.end_date, today)
}

fn classify_without_deadline(status: &TaskStatus) -> ClassificationResult {
    match status_style(status) {
        Some(style) => ClassificationResult {
            label: style.label.to_string(),
            colors: style.colors,
            urgency: Urgency::Upcoming,
            remaining_days: None,
        },
        None => ClassificationResult {
            label: status.as_str().to_string(),
            colors: NEUTRAL,
            urgency: Urgency::Upcoming,
            remaining_days: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::{CAUTION, DANGER, WARNING};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn today() -> NaiveDate {
        day(2024, 6, 10)
    }

    #[test]
    fn due_today_for_working_task() {
        let result = classify(&TaskStatus::WorkingOnIt, Some(today()), today());
        assert_eq!(result.label, "Deadline Tugas Hari Ini");
        assert_eq!(result.urgency, Urgency::DueToday);
        assert_eq!(result.colors, WARNING);
        assert_eq!(result.remaining_days, Some(0));
    }

    #[test]
    fn overdue_by_three_days() {
        let result = classify(&TaskStatus::WorkingOnIt, Some(day(2024, 6, 7)), today());
        assert_eq!(result.label, "Terlambat selama 3 hari");
        assert_eq!(result.urgency, Urgency::Overdue);
        assert_eq!(result.colors, DANGER);
    }

    #[test]
    fn upcoming_in_five_days() {
        let result = classify(&TaskStatus::OnPending, Some(day(2024, 6, 15)), today());
        assert_eq!(result.label, "Tersisa 5 hari");
        assert_eq!(result.urgency, Urgency::Upcoming);
        assert_eq!(result.colors, CAUTION);
    }

    #[test]
    fn completed_is_never_overdue() {
        for end in [day(2020, 1, 1), day(2024, 6, 9), today(), day(2030, 1, 1)] {
            let result = classify(&TaskStatus::Completed, Some(end), today());
            assert_eq!(result.label, "Selesai");
            assert_eq!(result.urgency, Urgency::Terminal);
            assert_eq!(result.remaining_days, None);
        }
        let undated = classify(&TaskStatus::Completed, None, today());
        assert_eq!(undated.urgency, Urgency::Terminal);
        assert_eq!(undated.label, "Selesai");
    }

    #[test]
    fn deadline_overrides_workflow_status() {
        for status in [
            TaskStatus::OnReview,
            TaskStatus::OnHold,
            TaskStatus::Rejected,
            TaskStatus::Unknown("needs_qa".to_string()),
        ] {
            let result = classify(&status, Some(today()), today());
            assert_eq!(result.urgency, Urgency::DueToday, "status {:?}", status);
            let late = classify(&status, Some(day(2024, 6, 1)), today());
            assert_eq!(late.urgency, Urgency::Overdue, "status {:?}", status);
        }
    }

    #[test]
    fn urgency_flips_exactly_at_zero() {
        let mut previous: Option<i64> = None;
        for offset in -3..=3 {
            let end = today() + chrono::Duration::days(offset);
            let result = classify(&TaskStatus::WorkingOnIt, Some(end), today());
            let remaining = result.remaining_days.expect("deadline evaluated");
            assert_eq!(remaining, offset);
            if let Some(previous) = previous {
                assert!(remaining > previous);
            }
            previous = Some(remaining);
            let expected = match offset {
                o if o < 0 => Urgency::Overdue,
                0 => Urgency::DueToday,
                _ => Urgency::Upcoming,
            };
            assert_eq!(result.urgency, expected, "offset {}", offset);
        }
    }

    #[test]
    fn missing_deadline_uses_status_table() {
        let result = classify(&TaskStatus::OnReview, None, today());
        assert_eq!(result.label, "Dalam Review");
        assert_eq!(result.urgency, Urgency::Upcoming);
        assert_eq!(result.remaining_days, None);

        let rejected = classify(&TaskStatus::Rejected, None, today());
        assert_eq!(rejected.label, "Ditolak");
        assert_eq!(rejected.colors.text, "#F69292");
    }

    #[test]
    fn unknown_status_without_deadline_passes_raw_label() {
        let status = TaskStatus::Unknown("menunggu_vendor".to_string());
        let result = classify(&status, None, today());
        assert_eq!(result.label, "menunggu_vendor");
        assert_eq!(result.colors, NEUTRAL);
    }

    #[test]
    fn result_depends_on_injected_today() {
        let end = Some(day(2024, 6, 12));
        let before = classify(&TaskStatus::WorkingOnIt, end, day(2024, 6, 10));
        let after = classify(&TaskStatus::WorkingOnIt, end, day(2024, 6, 14));
        assert_eq!(before.label, "Tersisa 2 hari");
        assert_eq!(after.label, "Terlambat selama 2 hari");
    }
}
