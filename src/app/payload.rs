//! Boundary between REST payloads and `Task` values. Everything past this
//! point is total; structural problems are reported here, before any
//! classification happens.

use crate::domain::dates::{parse_day, parse_timestamp};
use crate::errors::{TgsError, any_error_value};
use crate::types::{Task, TaskStatus};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct TaskWire {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    task_id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    task_name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    task_status: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    project_id: Option<Value>,
    #[serde(default)]
    project_name: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

/// Accepts a bare array or a response object carrying the array under
/// `data` or `tasks`.
pub fn parse_tasks(payload: &Value) -> Result<Vec<Task>, TgsError> {
    let entries = task_entries(payload)?;
    let mut tasks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        tasks.push(parse_task(index, entry)?);
    }
    debug!(count = tasks.len(), "parsed task payload");
    Ok(tasks)
}

pub fn parse_tasks_str(raw: &str) -> Result<Vec<Task>, TgsError> {
    let payload: Value = serde_json::from_str(raw).map_err(|error| {
        TgsError::new("PAYLOAD_INVALID", "task payload is not valid JSON", 1)
            .with_details(any_error_value(&error))
    })?;
    parse_tasks(&payload)
}

fn task_entries(payload: &Value) -> Result<&Vec<Value>, TgsError> {
    if let Some(entries) = payload.as_array() {
        return Ok(entries);
    }
    if let Some(object) = payload.as_object() {
        for key in ["data", "tasks"] {
            if let Some(entries) = object.get(key).and_then(Value::as_array) {
                return Ok(entries);
            }
        }
    }
    Err(TgsError::new(
        "PAYLOAD_INVALID",
        "task payload must be an array or an object with a data/tasks array",
        1,
    ))
}

fn parse_task(index: usize, entry: &Value) -> Result<Task, TgsError> {
    if !entry.is_object() {
        return Err(entry_error(index, "task entry must be an object"));
    }
    let wire: TaskWire = serde_json::from_value(entry.clone()).map_err(|error| {
        entry_error(index, "task entry has a field of the wrong type")
            .with_details(json!({"index": index, "message": error.to_string()}))
    })?;

    let id = wire
        .id
        .as_ref()
        .and_then(scalar_to_string)
        .or_else(|| wire.task_id.as_ref().and_then(scalar_to_string))
        .ok_or_else(|| entry_error(index, "task entry is missing id"))?;

    let raw_status = non_blank(wire.status)
        .or_else(|| non_blank(wire.task_status))
        .ok_or_else(|| entry_error(index, "task entry is missing status"))?;
    let status = TaskStatus::parse(&raw_status);
    if let TaskStatus::Unknown(raw) = &status {
        debug!(task_id = %id, status = %raw, "unrecognized task status");
    }

    let end_date = match non_blank(wire.end_date) {
        Some(raw) => {
            let parsed = parse_day(&raw);
            if parsed.is_none() {
                warn!(task_id = %id, end_date = %raw, "ignoring unusable end_date");
            }
            parsed
        }
        None => None,
    };

    let created_at = non_blank(wire.created_at).and_then(|raw| {
        let parsed = parse_timestamp(&raw);
        if parsed.is_none() {
            warn!(task_id = %id, created_at = %raw, "ignoring unusable created_at");
        }
        parsed
    });

    Ok(Task {
        id,
        name: non_blank(wire.name)
            .or_else(|| non_blank(wire.task_name))
            .unwrap_or_default(),
        status,
        end_date,
        project_id: wire.project_id.as_ref().and_then(scalar_to_string),
        project_name: non_blank(wire.project_name),
        created_at,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn entry_error(index: usize, message: &str) -> TgsError {
    TgsError::validation(format!("{} (index {})", message, index))
        .with_details(json!({"index": index}))
}
