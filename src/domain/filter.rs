use crate::domain::dates::{same_month, within_week};
use crate::types::{
    DeadlineRange, FilterCriteria, SortDirection, SortKey, SortSpec, StatusFilter, Task,
    TaskStatus,
};
use chrono::NaiveDate;
use std::cmp::Ordering;

pub const UNKNOWN_STATUS_PRIORITY: u16 = 999;

/// Workflow order used when sorting: pending work first, finished work last.
pub fn status_priority(status: &TaskStatus) -> u16 {
    match status {
        TaskStatus::OnPending => 1,
        TaskStatus::WorkingOnIt => 2,
        TaskStatus::OnReview => 3,
        TaskStatus::OnHold => 4,
        TaskStatus::Rejected => 5,
        TaskStatus::Completed => 6,
        TaskStatus::Unknown(_) => UNKNOWN_STATUS_PRIORITY,
    }
}

pub fn matches_status(status: &TaskStatus, filter: &StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(wanted) => status == wanted,
    }
}

pub fn matches_deadline(
    end_date: Option<NaiveDate>,
    range: DeadlineRange,
    today: NaiveDate,
) -> bool {
    if range == DeadlineRange::All {
        return true;
    }
    let Some(end) = end_date else {
        return false;
    };
    match range {
        DeadlineRange::All => true,
        DeadlineRange::Overdue => end < today,
        DeadlineRange::Today => end == today,
        DeadlineRange::Week => within_week(today, end),
        DeadlineRange::Month => same_month(end, today),
    }
}

pub fn filter_tasks(tasks: &[Task], criteria: &FilterCriteria, today: NaiveDate) -> Vec<Task> {
    let query = criteria
        .query
        .as_deref()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty());

    tasks
        .iter()
        .filter(|task| {
            if !matches_status(&task.status, &criteria.status) {
                return false;
            }
            if !matches_deadline(task.end_date, criteria.deadline_range, today) {
                return false;
            }
            if let Some(from) = criteria.from
                && !task.end_date.is_some_and(|end| end >= from)
            {
                return false;
            }
            if let Some(to) = criteria.to
                && !task.end_date.is_some_and(|end| end <= to)
            {
                return false;
            }
            if let Some(query) = &query
                && !task.name.to_lowercase().contains(query.as_str())
            {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Stable sort. `Desc` flips the comparison only, so tasks that compare equal
/// keep their input order in both directions.
pub fn sort_tasks(tasks: &[Task], sort: SortSpec) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| match sort.key {
        SortKey::StatusPriority => {
            directed(status_priority(&a.status).cmp(&status_priority(&b.status)), sort.direction)
        }
        SortKey::CreatedAt => match (a.created_at, b.created_at) {
            (Some(left), Some(right)) => directed(left.cmp(&right), sort.direction),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
    sorted
}

pub fn filter_and_sort(
    tasks: &[Task],
    criteria: &FilterCriteria,
    sort: SortSpec,
    today: NaiveDate,
) -> Vec<Task> {
    sort_tasks(&filter_tasks(tasks, criteria, today), sort)
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
