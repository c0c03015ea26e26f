// src/internal/schema/loader.rs

use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Problems with the schema files themselves, as opposed to the responses they check
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("schema file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema {name} does not compile: {message}")]
    Invalid { name: String, message: String },
}

/// Resolves schema names under a fixed directory. Every call re-reads the file.
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    dir: PathBuf,
}

impl SchemaLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Absolute names are used as-is, everything else is joined to the directory
    pub fn resolve(&self, name: &str) -> PathBuf {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.dir.join(candidate)
        }
    }

    pub fn load(&self, name: &str) -> Result<Value, SchemaError> {
        let path = self.resolve(name);
        debug!("Loading schema {}", path.display());

        let raw = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SchemaError::NotFound { path: path.clone() },
            _ => SchemaError::Io {
                path: path.clone(),
                source,
            },
        })?;

        serde_json::from_str(&raw).map_err(|source| SchemaError::Parse { path, source })
    }
}
