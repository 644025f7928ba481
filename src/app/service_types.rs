use crate::types::{
    ClassificationResult, Config, DeadlineRange, ProjectSummary, SortDirection, SortKey,
    StatusFilter, Task, TaskStatus,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceContext {
    pub repo_root: String,
    pub today: Arc<dyn Fn() -> NaiveDate + Send + Sync>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResult {
    pub initialized: bool,
    pub config_file: String,
    pub config: Config,
}

#[derive(Debug, Clone)]
pub struct ClassifyInput {
    pub status: TaskStatus,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResult {
    pub today: NaiveDate,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub classification: ClassificationResult,
}

/// Filter and sort options as they arrive from a caller. `None` means "use
/// the configured default".
#[derive(Debug, Clone, Default)]
pub struct ListInput {
    pub source: Option<String>,
    pub status: StatusFilter,
    pub deadline_range: Option<DeadlineRange>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub query: Option<String>,
    pub sort_key: SortKey,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedTask {
    #[serde(flatten)]
    pub task: Task,
    pub classification: ClassificationResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub today: NaiveDate,
    pub tasks: Vec<ClassifiedTask>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedGroup {
    pub key: String,
    pub tasks: Vec<ClassifiedTask>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupResult {
    pub today: NaiveDate,
    pub groups: Vec<ClassifiedGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub today: NaiveDate,
    pub projects: Vec<ProjectSummary>,
}
