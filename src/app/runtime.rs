use crate::store::paths::STORE_DIR;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TGS_LOG";

/// The only place the system clock is read. Everything downstream takes
/// `today` as a parameter.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn find_store_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join(STORE_DIR).exists() {
            return Some(dir);
        }
        let parent = dir.parent()?.to_path_buf();
        if parent == dir {
            return None;
        }
        dir = parent;
    }
}

pub fn get_repo_root() -> PathBuf {
    find_store_root()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
