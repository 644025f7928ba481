use crate::errors::{TgsError, io_error_value};
use std::io::Read;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

const STDIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the whole task payload from stdin, giving up after 30 seconds so a
/// forgotten pipe does not hang the command.
pub fn read_stdin_content() -> Result<String, TgsError> {
    read_payload(std::io::stdin(), STDIN_TIMEOUT)
}

/// Drains `source` on a worker thread. A blank payload is a validation error
/// because an empty task list piped by mistake would otherwise look valid.
pub fn read_payload<R>(mut source: R, timeout: Duration) -> Result<String, TgsError>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut input = String::new();
        let result = source.read_to_string(&mut input).map(|_| input);
        let _ = tx.send(result);
    });

    let content = match rx.recv_timeout(timeout) {
        Ok(result) => result.map_err(|error| {
            TgsError::new("IO_ERROR", "failed reading task payload from stdin", 2)
                .with_details(io_error_value(&error))
        })?,
        Err(RecvTimeoutError::Timeout) => {
            return Err(TgsError::validation(format!(
                "no task payload on stdin after {} seconds",
                timeout.as_secs()
            )));
        }
        Err(RecvTimeoutError::Disconnected) => {
            return Err(TgsError::new(
                "IO_ERROR",
                "failed reading task payload from stdin",
                2,
            ));
        }
    };
    if content.trim().is_empty() {
        return Err(TgsError::validation("task payload on stdin is empty"));
    }
    Ok(content)
}
