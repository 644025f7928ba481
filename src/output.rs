use crate::errors::{TgsError, any_error_value};
use crate::types::{Envelope, EnvelopeErr, EnvelopeError, EnvelopeOk, SCHEMA_VERSION};
use serde::Serialize;
use serde_json::Value;

pub fn ok_envelope<T>(command: impl Into<String>, data: T) -> Envelope<T> {
    Envelope::Ok(EnvelopeOk {
        schema_version: SCHEMA_VERSION,
        command: command.into(),
        ok: true,
        data,
    })
}

pub fn err_envelope(
    command: impl Into<String>,
    code: impl Into<String>,
    message: impl Into<String>,
    details: Option<Value>,
) -> Envelope<Value> {
    Envelope::Err(EnvelopeErr {
        schema_version: SCHEMA_VERSION,
        command: command.into(),
        ok: false,
        error: EnvelopeError {
            code: code.into(),
            message: message.into(),
            details,
        },
    })
}

/// Error envelope for a failed command. The exit code stays out of the JSON;
/// callers read it from the process status.
pub fn error_envelope(command: impl Into<String>, error: &TgsError) -> Envelope<Value> {
    err_envelope(
        command,
        error.code.clone(),
        error.message.clone(),
        error.details.clone(),
    )
}

pub fn render_envelope<T: Serialize>(envelope: &Envelope<T>) -> Result<String, TgsError> {
    serde_json::to_string_pretty(envelope).map_err(|error| {
        TgsError::new("INTERNAL_ERROR", "failed serializing json output", 2)
            .with_details(any_error_value(&error))
    })
}
