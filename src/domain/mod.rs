pub mod classify;
pub mod dates;
pub mod filter;
pub mod group;
pub mod palette;

pub use classify::{classify, classify_task};
pub use filter::{filter_and_sort, filter_tasks, sort_tasks, status_priority};
pub use group::{group_by_project, summarize_projects};
