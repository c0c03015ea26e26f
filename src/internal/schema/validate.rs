// src/internal/schema/validate.rs

use serde_json::Value;
use std::fmt;

use super::loader::SchemaError;

/// One failed schema keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer into the response body ("" is the root)
    pub instance_path: String,
    /// JSON pointer to the keyword in the schema document
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.instance_path.is_empty() {
            "/"
        } else {
            &self.instance_path
        };
        write!(f, "{} (at {}, constraint {})", self.message, at, self.schema_path)
    }
}

/// Check `instance` against `schema`, collecting every violation.
///
/// An empty vector means the instance conforms. A schema that does not
/// compile is a fixture problem and comes back as [`SchemaError::Invalid`].
pub fn validate(name: &str, schema: &Value, instance: &Value) -> Result<Vec<Violation>, SchemaError> {
    let validator = jsonschema::validator_for(schema).map_err(|e| SchemaError::Invalid {
        name: name.to_string(),
        message: e.to_string(),
    })?;

    Ok(validator
        .iter_errors(instance)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect())
}
