use crate::domain::classify::classify_task;
use crate::types::{ProjectGroup, ProjectSummary, StatusCount, Task, TaskStatus, Urgency};
use chrono::NaiveDate;
use std::collections::HashMap;

pub const UNASSIGNED_PROJECT: &str = "Tanpa Proyek";

pub fn project_key(task: &Task) -> String {
    non_blank(task.project_name.as_deref())
        .or_else(|| non_blank(task.project_id.as_deref()))
        .unwrap_or(UNASSIGNED_PROJECT)
        .to_string()
}

/// Buckets tasks by project in first-seen order; tasks keep input order
/// inside their bucket.
pub fn group_by_project(tasks: &[Task]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for task in tasks {
        let key = project_key(task);
        match index_by_key.get(&key) {
            Some(&index) => groups[index].tasks.push(task.clone()),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(ProjectGroup {
                    key,
                    tasks: vec![task.clone()],
                });
            }
        }
    }

    groups
}

pub fn summarize_projects(tasks: &[Task], today: NaiveDate) -> Vec<ProjectSummary> {
    group_by_project(tasks)
        .into_iter()
        .map(|group| summarize_group(&group, today))
        .collect()
}

fn summarize_group(group: &ProjectGroup, today: NaiveDate) -> ProjectSummary {
    let mut completed = 0;
    let mut overdue = 0;
    let mut due_today = 0;
    let mut by_status: Vec<StatusCount> = Vec::new();

    for task in &group.tasks {
        if task.status == TaskStatus::Completed {
            completed += 1;
        }
        match classify_task(task, today).urgency {
            Urgency::Overdue => overdue += 1,
            Urgency::DueToday => due_today += 1,
            Urgency::Upcoming | Urgency::Terminal => {}
        }
        match by_status.iter_mut().find(|entry| entry.status == task.status) {
            Some(entry) => entry.count += 1,
            None => by_status.push(StatusCount {
                status: task.status.clone(),
                count: 1,
            }),
        }
    }

    let total = group.tasks.len();
    ProjectSummary {
        key: group.key.clone(),
        total,
        completed,
        overdue,
        due_today,
        progress_percent: progress_percent(completed, total),
        by_status,
    }
}

fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 * 100.0 / total as f64).round()) as u8
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
