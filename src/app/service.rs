use crate::app::payload::parse_tasks_str;
use crate::app::service_types::*;
use crate::app::stdin::read_stdin_content;
use crate::domain::{classify, classify_task, filter_and_sort, group_by_project, summarize_projects};
use crate::errors::{TgsError, io_error_value};
use crate::store::config::{read_config, write_default_config};
use crate::store::paths::{get_paths, resolve_tasks_file};
use crate::types::{
    Config, FilterCriteria, ProjectGroup, SortDirection, SortKey, SortSpec, Task,
};
use chrono::NaiveDate;
use std::fs;
use std::sync::Arc;
use tracing::debug;

pub struct BoardService {
    ctx: ServiceContext,
}

impl BoardService {
    pub fn new(
        repo_root: impl Into<String>,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            ctx: ServiceContext {
                repo_root: repo_root.into(),
                today: Arc::new(today),
            },
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.ctx.today.as_ref()()
    }

    pub fn init(&self) -> Result<InitResult, TgsError> {
        let initialized = write_default_config(&self.ctx.repo_root)?;
        let config = read_config(&self.ctx.repo_root)?;
        Ok(InitResult {
            initialized,
            config_file: get_paths(&self.ctx.repo_root)
                .config_file
                .to_string_lossy()
                .to_string(),
            config,
        })
    }

    pub fn config(&self) -> Result<Config, TgsError> {
        read_config(&self.ctx.repo_root)
    }

    pub fn classify(&self, input: &ClassifyInput) -> ClassifyResult {
        let today = self.today();
        ClassifyResult {
            today,
            status: input.status.clone(),
            end_date: input.end_date,
            classification: classify(&input.status, input.end_date, today),
        }
    }

    pub fn list(&self, input: &ListInput) -> Result<ListResult, TgsError> {
        let config = self.config()?;
        let tasks = self.load_tasks(input.source.as_deref(), &config)?;
        let today = self.today();
        let selected = self.select(&tasks, input, &config, today);
        Ok(ListResult {
            today,
            tasks: classify_all(&selected, today),
        })
    }

    /// Filters and sorts first, then buckets, so tasks inside a project keep
    /// the requested order.
    pub fn group(&self, input: &ListInput) -> Result<GroupResult, TgsError> {
        let config = self.config()?;
        let tasks = self.load_tasks(input.source.as_deref(), &config)?;
        let today = self.today();
        let selected = self.select(&tasks, input, &config, today);
        let groups = group_by_project(&selected)
            .into_iter()
            .map(|ProjectGroup { key, tasks }| ClassifiedGroup {
                key,
                tasks: classify_all(&tasks, today),
            })
            .collect();
        Ok(GroupResult { today, groups })
    }

    pub fn summary(&self, source: Option<&str>) -> Result<SummaryResult, TgsError> {
        let config = self.config()?;
        let tasks = self.load_tasks(source, &config)?;
        let today = self.today();
        Ok(SummaryResult {
            today,
            projects: summarize_projects(&tasks, today),
        })
    }

    fn select(
        &self,
        tasks: &[Task],
        input: &ListInput,
        config: &Config,
        today: NaiveDate,
    ) -> Vec<Task> {
        let criteria = FilterCriteria {
            status: input.status.clone(),
            deadline_range: input
                .deadline_range
                .unwrap_or(config.default_deadline_range),
            from: input.from,
            to: input.to,
            query: input.query.clone(),
        };
        let sort = SortSpec {
            key: input.sort_key,
            direction: input.direction.unwrap_or(match input.sort_key {
                SortKey::StatusPriority => config.default_sort_direction,
                SortKey::CreatedAt => SortDirection::Desc,
            }),
        };
        let selected = filter_and_sort(tasks, &criteria, sort, today);
        debug!(
            total = tasks.len(),
            kept = selected.len(),
            ?criteria,
            ?sort,
            "filtered tasks"
        );
        selected
    }

    fn load_tasks(&self, source: Option<&str>, config: &Config) -> Result<Vec<Task>, TgsError> {
        let raw = match source {
            Some("-") => read_stdin_content()?,
            Some(path) => read_task_file(path)?,
            None => {
                let configured = config.tasks_file.as_deref().ok_or_else(|| {
                    TgsError::validation(
                        "no task source: pass --file or set tasks_file in .tugas/config.json",
                    )
                })?;
                let path = resolve_tasks_file(&self.ctx.repo_root, configured);
                read_task_file(&path.to_string_lossy())?
            }
        };
        parse_tasks_str(&raw)
    }
}

fn read_task_file(path: &str) -> Result<String, TgsError> {
    debug!(path, "reading task payload");
    fs::read_to_string(path).map_err(|error| {
        TgsError::new("IO_ERROR", format!("failed reading task file: {}", path), 2)
            .with_details(io_error_value(&error))
    })
}

fn classify_all(tasks: &[Task], today: NaiveDate) -> Vec<ClassifiedTask> {
    tasks
        .iter()
        .map(|task| ClassifiedTask {
            task: task.clone(),
            classification: classify_task(task, today),
        })
        .collect()
}
