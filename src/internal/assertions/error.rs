// src/internal/assertions/error.rs

use serde_json::Value;
use thiserror::Error;

use crate::internal::schema::{SchemaError, Violation};

#[derive(Debug, Error)]
pub enum AssertionError {
    #[error("expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },
    #[error("expected reason {expected:?}, got {actual:?}")]
    Reason { expected: String, actual: String },
    #[error("expected body {expected}, got {actual}")]
    Body { expected: Value, actual: Value },
    #[error("expected {pointer} == {expected}, got {actual}")]
    Field {
        pointer: String,
        expected: Value,
        actual: Value,
    },
    #[error("field {pointer} is missing from the response body")]
    MissingField { pointer: String },
    #[error("field {pointer} is not an array")]
    NotArray { pointer: String },
    #[error("expected {expected} items at {pointer}, got {actual}")]
    Length {
        pointer: String,
        expected: usize,
        actual: usize,
    },
    #[error("expected an empty body, got {text:?}")]
    NotEmpty { text: String },
    #[error("response body is not JSON ({source}): {text:?}")]
    NotJson {
        text: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("response does not match schema {schema}:\n{}", format_violations(.violations))]
    Schema {
        schema: String,
        violations: Vec<Violation>,
    },
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Why a case did not pass
#[derive(Debug, Error)]
pub enum CaseFailure {
    /// The request never produced a response
    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionError),
    /// A schema file could not be used; the response was never judged
    #[error("fixture error: {0}")]
    Fixture(#[from] SchemaError),
}

impl CaseFailure {
    /// Short label for reports
    pub fn kind(&self) -> &'static str {
        match self {
            CaseFailure::Transport(_) => "error",
            CaseFailure::Assertion(_) => "failed",
            CaseFailure::Fixture(_) => "setup",
        }
    }
}
