use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TgsError {
    pub code: String,
    pub message: String,
    pub exit_code: i32,
    pub details: Option<Value>,
}

impl TgsError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            exit_code,
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message, 1)
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for TgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for TgsError {}

pub fn io_error_value(error: &std::io::Error) -> Value {
    serde_json::json!({"kind": format!("{:?}", error.kind()), "message": error.to_string()})
}

pub fn any_error_value(error: &impl fmt::Display) -> Value {
    serde_json::json!({"message": error.to_string()})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_code_and_message() {
        let error = TgsError::validation("status must not be empty");
        assert_eq!(error.to_string(), "VALIDATION_ERROR: status must not be empty");
        assert_eq!(error.exit_code, 1);
    }

    #[test]
    fn with_details_attaches_payload() {
        let error = TgsError::new("IO_ERROR", "failed reading tasks", 2)
            .with_details(serde_json::json!({"path": "tasks.json"}));
        assert_eq!(
            error.details.as_ref().and_then(|value| value.get("path")),
            Some(&serde_json::json!("tasks.json"))
        );
    }
}
