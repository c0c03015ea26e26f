// src/internal/assertions/expectation.rs

use serde_json::Value;
use std::fmt;

/// A single check against a response
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// Numeric status code equality
    Status(u16),
    /// Reason phrase equality, e.g. "No Content"
    Reason(String),
    /// Deep equality of the parsed JSON body
    Body(Value),
    /// The value at a JSON pointer equals `value`
    Field { pointer: String, value: Value },
    /// The array at a JSON pointer has exactly `len` items
    Length { pointer: String, len: usize },
    /// The raw body is the empty string
    EmptyBody,
    /// The parsed body conforms to the named schema file
    Schema(String),
}

impl Expectation {
    pub fn field(pointer: impl Into<String>, value: impl Into<Value>) -> Self {
        Expectation::Field {
            pointer: pointer.into(),
            value: value.into(),
        }
    }

    pub fn length(pointer: impl Into<String>, len: usize) -> Self {
        Expectation::Length {
            pointer: pointer.into(),
            len,
        }
    }

    pub fn schema(name: impl Into<String>) -> Self {
        Expectation::Schema(name.into())
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Status(code) => write!(f, "status == {}", code),
            Expectation::Reason(reason) => write!(f, "reason == {:?}", reason),
            Expectation::Body(body) => write!(f, "body == {}", body),
            Expectation::Field { pointer, value } => write!(f, "{} == {}", pointer, value),
            Expectation::Length { pointer, len } => write!(f, "len({}) == {}", pointer, len),
            Expectation::EmptyBody => f.write_str("body is empty"),
            Expectation::Schema(name) => write!(f, "body matches {}", name),
        }
    }
}
