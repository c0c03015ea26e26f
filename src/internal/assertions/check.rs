// src/internal/assertions/check.rs

use serde_json::Value;

use super::error::{AssertionError, CaseFailure};
use super::expectation::Expectation;
use crate::internal::requester::ApiResponse;
use crate::internal::schema::{self, SchemaLoader};

fn parse_body(response: &ApiResponse) -> Result<Value, AssertionError> {
    response.json().map_err(|source| AssertionError::NotJson {
        text: response.text.clone(),
        source,
    })
}

fn lookup<'a>(body: &'a Value, pointer: &str) -> Result<&'a Value, AssertionError> {
    body.pointer(pointer)
        .ok_or_else(|| AssertionError::MissingField {
            pointer: pointer.to_string(),
        })
}

/// Check one expectation. Schema files are loaded from `loader` on demand.
pub fn check(
    response: &ApiResponse,
    expectation: &Expectation,
    loader: &SchemaLoader,
) -> Result<(), CaseFailure> {
    match expectation {
        Expectation::Status(expected) => {
            if response.status != *expected {
                return Err(AssertionError::Status {
                    expected: *expected,
                    actual: response.status,
                }
                .into());
            }
        }
        Expectation::Reason(expected) => {
            if &response.reason != expected {
                return Err(AssertionError::Reason {
                    expected: expected.clone(),
                    actual: response.reason.clone(),
                }
                .into());
            }
        }
        Expectation::Body(expected) => {
            let actual = parse_body(response)?;
            if &actual != expected {
                return Err(AssertionError::Body {
                    expected: expected.clone(),
                    actual,
                }
                .into());
            }
        }
        Expectation::Field { pointer, value } => {
            let body = parse_body(response)?;
            let actual = lookup(&body, pointer)?;
            if actual != value {
                return Err(AssertionError::Field {
                    pointer: pointer.clone(),
                    expected: value.clone(),
                    actual: actual.clone(),
                }
                .into());
            }
        }
        Expectation::Length { pointer, len } => {
            let body = parse_body(response)?;
            let items = lookup(&body, pointer)?
                .as_array()
                .ok_or_else(|| AssertionError::NotArray {
                    pointer: pointer.clone(),
                })?;
            if items.len() != *len {
                return Err(AssertionError::Length {
                    pointer: pointer.clone(),
                    expected: *len,
                    actual: items.len(),
                }
                .into());
            }
        }
        Expectation::EmptyBody => {
            if !response.text.is_empty() {
                return Err(AssertionError::NotEmpty {
                    text: response.text.clone(),
                }
                .into());
            }
        }
        Expectation::Schema(name) => {
            // Load before parsing so a broken fixture is reported as such
            let document = loader.load(name)?;
            let body = parse_body(response)?;
            let violations = schema::validate(name, &document, &body)?;
            if !violations.is_empty() {
                return Err(AssertionError::Schema {
                    schema: name.clone(),
                    violations,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Check expectations in order, stopping at the first failure
pub fn check_all(
    response: &ApiResponse,
    expectations: &[Expectation],
    loader: &SchemaLoader,
) -> Result<(), CaseFailure> {
    expectations
        .iter()
        .try_for_each(|expectation| check(response, expectation, loader))
}
