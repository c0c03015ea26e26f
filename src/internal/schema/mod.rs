pub mod loader;
pub mod validate;

pub use loader::{SchemaError, SchemaLoader};
pub use validate::{validate, Violation};
