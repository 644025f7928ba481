#![allow(dead_code)]

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::{Builder, TempDir};
use tugas::types::SCHEMA_VERSION;

pub const TODAY: &str = "2024-06-10";

#[derive(Debug)]
pub struct CliOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
pub struct JsonOutput {
    pub cli: CliOutput,
    pub envelope: Value,
}

pub fn make_repo() -> TempDir {
    Builder::new()
        .prefix("tugas-test-")
        .tempdir()
        .expect("failed creating temporary test repo")
}

pub fn write_tasks(repo: &Path, payload: &Value) -> PathBuf {
    let path = repo.join("tasks.json");
    std::fs::write(&path, payload.to_string()).expect("failed writing tasks payload");
    path
}

/// A REST-shaped payload spanning every status and deadline bucket relative
/// to `TODAY`.
pub fn sample_payload() -> Value {
    serde_json::json!({
        "data": [
            {"id": 1, "task_name": "Pondasi", "task_status": "completed", "end_date": "2024-06-01", "project_name": "Gudang", "created_at": "2024-05-01T08:00:00Z"},
            {"id": 2, "task_name": "Rangka Atap", "task_status": "working_on_it", "end_date": "2024-06-10", "project_name": "Gudang", "created_at": "2024-05-03T08:00:00Z"},
            {"id": 3, "task_name": "Desain Logo", "task_status": "on_pending", "end_date": "2024-06-15", "project_name": "Branding", "created_at": "2024-05-02T08:00:00Z"},
            {"id": 4, "task_name": "Pagar Depan", "task_status": "rejected", "end_date": "2024-07-01", "project_name": "Gudang"},
            {"id": 5, "task_name": "Kartu Nama", "task_status": "on_review", "end_date": "2024-06-07", "project_name": "Branding", "assign_by": "Sari"},
            {"id": 6, "task_name": "Cat Dinding", "task_status": "on_hold", "end_date": "2024-06-30", "project_name": "Gudang"}
        ]
    })
}

pub fn run_cli<I, S>(repo: &Path, args: I) -> CliOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run_cli_with_stdin(repo, args, None)
}

pub fn run_cli_with_stdin<I, S>(repo: &Path, args: I, stdin: Option<&str>) -> CliOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args_vec = normalize_args(args);
    let mut child = Command::new(tgs_bin())
        .args(&args_vec)
        .current_dir(repo)
        .env("NO_COLOR", "1")
        .env_remove("TGS_LOG")
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed executing tgs binary");
    if let Some(input) = stdin {
        let mut handle = child.stdin.take().expect("stdin handle");
        handle
            .write_all(input.as_bytes())
            .expect("failed writing stdin");
    }
    let output = child.wait_with_output().expect("failed waiting for tgs");

    CliOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

pub fn run_json<I, S>(repo: &Path, args: I) -> JsonOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args_vec = normalize_args(args);
    args_vec.push("--json".to_string());
    args_vec.push("--today".to_string());
    args_vec.push(TODAY.to_string());
    parse_json(run_cli(repo, &args_vec))
}

pub fn parse_json(cli: CliOutput) -> JsonOutput {
    let trimmed = cli.stdout.trim();
    assert!(
        !trimmed.is_empty(),
        "expected JSON output but stdout was empty\nstderr:\n{}",
        cli.stderr
    );
    let envelope = serde_json::from_str::<Value>(trimmed).unwrap_or_else(|error| {
        panic!(
            "failed parsing JSON envelope: {error}\nstdout:\n{}\nstderr:\n{}",
            cli.stdout, cli.stderr
        )
    });
    assert_envelope_shape(&envelope);
    JsonOutput { cli, envelope }
}

pub fn assert_envelope_shape(envelope: &Value) {
    assert_eq!(
        envelope.get("schema_version").and_then(Value::as_u64),
        Some(SCHEMA_VERSION as u64)
    );
    assert!(
        envelope.get("command").and_then(Value::as_str).is_some(),
        "envelope.command must be a string"
    );
    let ok = envelope
        .get("ok")
        .and_then(Value::as_bool)
        .expect("envelope.ok must be a boolean");
    if ok {
        assert!(
            envelope.get("data").is_some(),
            "ok envelope must include data"
        );
    } else {
        assert!(
            envelope.get("error").is_some(),
            "error envelope must include error"
        );
    }
}

pub fn assert_error_code(result: &JsonOutput, code: &str) {
    assert_eq!(
        result.envelope.get("ok").and_then(Value::as_bool),
        Some(false)
    );
    assert_eq!(
        result
            .envelope
            .get("error")
            .and_then(|value| value.get("code"))
            .and_then(Value::as_str),
        Some(code)
    );
}

pub fn ok_data(envelope: &Value) -> &Value {
    assert_eq!(envelope.get("ok").and_then(Value::as_bool), Some(true));
    envelope
        .get("data")
        .expect("ok envelope missing data field")
}

pub fn ids_from_task_list(envelope: &Value) -> Vec<String> {
    tasks_field(ok_data(envelope), "id")
}

pub fn tasks_field(container: &Value, field: &str) -> Vec<String> {
    container
        .get("tasks")
        .and_then(Value::as_array)
        .expect("expected tasks array")
        .iter()
        .filter_map(|task| task.get(field).and_then(Value::as_str))
        .map(ToString::to_string)
        .collect()
}

fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|value| value.as_ref().to_string())
        .collect()
}

fn tgs_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tgs"))
}
