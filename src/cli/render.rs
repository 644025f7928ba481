use crate::app::service_types::{
    ClassifiedGroup, ClassifiedTask, ClassifyResult, GroupResult, InitResult, ListResult,
    SummaryResult,
};
use crate::cli::style;
use crate::cli::terminal::{resolve_width, truncate};
use crate::domain::group::project_key;
use crate::types::{Config, ProjectSummary};

const MIN_NAME_WIDTH: usize = 12;

pub fn print_classification(result: &ClassifyResult) {
    let classification = &result.classification;
    println!(
        "{}",
        style::urgency(&classification.label, classification.urgency)
    );
    println!(
        "{}={} {}={} {}={}",
        style::key("status"),
        result.status.as_str(),
        style::key("end_date"),
        result
            .end_date
            .map(|day| day.to_string())
            .unwrap_or_else(|| "-".to_string()),
        style::key("today"),
        result.today
    );
    println!(
        "{}={:?} {}={} {}={}",
        style::key("urgency"),
        classification.urgency,
        style::key("background"),
        classification.colors.background,
        style::key("text"),
        classification.colors.text
    );
}

pub fn print_task_list(result: &ListResult) {
    for line in render_task_rows(&result.tasks, true, None) {
        println!("{}", line);
    }
}

pub fn print_groups(result: &GroupResult) {
    if result.groups.is_empty() {
        println!("{}", style::muted("no tasks"));
        return;
    }
    for (index, group) in result.groups.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_group(group);
    }
}

fn print_group(group: &ClassifiedGroup) {
    println!(
        "{} {}",
        style::project(&group.key),
        style::muted(&format!("({})", group.tasks.len()))
    );
    for line in render_task_rows(&group.tasks, false, None) {
        println!("  {}", line);
    }
}

pub fn print_summary(result: &SummaryResult) {
    if result.projects.is_empty() {
        println!("{}", style::muted("no projects"));
        return;
    }
    for project in &result.projects {
        print_project_summary(project);
    }
}

fn print_project_summary(summary: &ProjectSummary) {
    println!(
        "{} {}% ({}/{})",
        style::project(&summary.key),
        summary.progress_percent,
        summary.completed,
        summary.total
    );
    let counts = summary
        .by_status
        .iter()
        .map(|entry| format!("{}={}", entry.status.as_str(), entry.count))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "  {}={} {}={} {}",
        style::key("overdue"),
        summary.overdue,
        style::key("due_today"),
        summary.due_today,
        style::muted(&counts)
    );
}

pub fn print_init(result: &InitResult) {
    if result.initialized {
        println!("created {}", result.config_file);
    } else {
        println!("{}", style::muted(&format!("exists {}", result.config_file)));
    }
    print_config(&result.config);
}

pub fn print_config(config: &Config) {
    println!(
        "{}={:?} {}={:?}",
        style::key("default_sort_direction"),
        config.default_sort_direction,
        style::key("default_deadline_range"),
        config.default_deadline_range
    );
    if let Some(tasks_file) = &config.tasks_file {
        println!("{}={}", style::key("tasks_file"), tasks_file);
    }
}

/// Aligned rows for a task table. The name column absorbs whatever width the
/// terminal has left.
pub fn render_task_rows(
    tasks: &[ClassifiedTask],
    with_project: bool,
    width: Option<usize>,
) -> Vec<String> {
    if tasks.is_empty() {
        return vec![style::muted("no tasks")];
    }

    let mut header = vec!["ID", "STATUS", "DEADLINE", "LABEL"];
    if with_project {
        header.push("PROJECT");
    }
    header.push("NAME");

    let rows: Vec<Vec<String>> = tasks
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.task.id.clone(),
                entry.task.status.as_str().to_string(),
                entry
                    .task
                    .end_date
                    .map(|day| day.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                entry.classification.label.clone(),
            ];
            if with_project {
                row.push(project_key(&entry.task));
            }
            row.push(entry.task.name.clone());
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|value| value.chars().count()).collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }
    let name_index = header.len() - 1;
    let fixed: usize = widths[..name_index].iter().map(|width| width + 2).sum();
    let available = resolve_width(width).saturating_sub(fixed).max(MIN_NAME_WIDTH);
    widths[name_index] = widths[name_index].min(available);

    let label_index = 3;
    let mut lines = vec![style::heading(
        header
            .iter()
            .enumerate()
            .map(|(index, cell)| pad(cell, widths[index]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end(),
    )];

    for (row, entry) in rows.iter().zip(tasks) {
        let cells = row
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let padded = pad(&truncate(cell, widths[index]), widths[index]);
                if index == 0 {
                    style::task_id(&padded)
                } else if index == label_index {
                    style::urgency(&padded, entry.classification.urgency)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join("  ").trim_end().to_string());
    }
    lines
}

fn pad(value: &str, width: usize) -> String {
    format!("{:width$}", value, width = width)
}
