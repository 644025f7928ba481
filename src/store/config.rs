use crate::errors::{TgsError, any_error_value, io_error_value};
use crate::store::paths::get_paths;
use crate::types::{Config, DeadlineRange, SCHEMA_VERSION, SortDirection};
use chrono::Utc;
use serde_json::Value;
use std::fs::{OpenOptions, create_dir_all, read_to_string, remove_file, rename};
use std::io::Write;
use std::path::Path;
use tracing::debug;

fn is_config(value: &Value) -> Option<Config> {
    let config: Config = serde_json::from_value(value.clone()).ok()?;
    if config.schema_version == 0 || config.schema_version > SCHEMA_VERSION {
        return None;
    }
    if let Some(tasks_file) = &config.tasks_file
        && tasks_file.trim().is_empty()
    {
        return None;
    }
    Some(config)
}

pub fn default_config() -> Config {
    Config {
        schema_version: SCHEMA_VERSION,
        default_sort_direction: SortDirection::Asc,
        default_deadline_range: DeadlineRange::All,
        tasks_file: None,
    }
}

/// Creates the config with defaults; an existing file is left untouched.
/// Returns whether a file was written.
pub fn write_default_config(repo_root: impl AsRef<Path>) -> Result<bool, TgsError> {
    let paths = get_paths(repo_root.as_ref());
    match read_to_string(&paths.config_file) {
        Ok(_) => return Ok(false),
        Err(error) => {
            if error.kind() != std::io::ErrorKind::NotFound {
                return Err(
                    TgsError::new("CONFIG_READ_FAILED", "Failed checking config", 2)
                        .with_details(io_error_value(&error)),
                );
            }
        }
    }
    write_config(repo_root, &default_config())?;
    Ok(true)
}

pub fn write_config(repo_root: impl AsRef<Path>, config: &Config) -> Result<(), TgsError> {
    let paths = get_paths(repo_root);
    create_dir_all(&paths.store_dir)
        .map_err(|error| write_failed().with_details(io_error_value(&error)))?;

    let temp = format!(
        "{}.tmp-{}-{}",
        paths.config_file.display(),
        std::process::id(),
        Utc::now().timestamp_millis()
    );
    let payload = serde_json::to_string_pretty(config)
        .map_err(|error| write_failed().with_details(any_error_value(&error)))?;

    let mut handle = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp)
        .map_err(|error| write_failed().with_details(io_error_value(&error)))?;
    if let Err(error) = handle.write_all(format!("{}\n", payload).as_bytes()) {
        let _ = remove_file(&temp);
        return Err(write_failed().with_details(io_error_value(&error)));
    }
    if let Err(error) = handle.sync_all() {
        let _ = remove_file(&temp);
        return Err(write_failed().with_details(io_error_value(&error)));
    }
    if let Err(error) = rename(&temp, &paths.config_file) {
        let _ = remove_file(&temp);
        return Err(write_failed().with_details(io_error_value(&error)));
    }

    debug!(path = %paths.config_file.display(), "wrote config");
    Ok(())
}

/// Reads `.tugas/config.json`. A missing file means defaults; it is not
/// created here, only `tgs init` writes one.
pub fn read_config(repo_root: impl AsRef<Path>) -> Result<Config, TgsError> {
    let paths = get_paths(repo_root.as_ref());

    let raw = match read_to_string(&paths.config_file) {
        Ok(raw) => raw,
        Err(error) => {
            if error.kind() == std::io::ErrorKind::NotFound {
                debug!(path = %paths.config_file.display(), "no config file, using defaults");
                return Ok(default_config());
            }
            return Err(
                TgsError::new("CONFIG_READ_FAILED", "Failed reading config", 2)
                    .with_details(io_error_value(&error)),
            );
        }
    };

    let parsed: Value = serde_json::from_str(&raw).map_err(|error| {
        TgsError::new("CONFIG_INVALID", "Config JSON is malformed", 2)
            .with_details(any_error_value(&error))
    })?;

    if let Some(config) = is_config(&parsed) {
        return Ok(config);
    }

    Err(TgsError::new("CONFIG_INVALID", "Config shape is invalid", 2).with_details(parsed))
}

fn write_failed() -> TgsError {
    TgsError::new("CONFIG_WRITE_FAILED", "Failed writing config", 2)
}
