pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::assertions::{AssertionError, CaseFailure, Expectation};
pub use internal::config::{AppConfig, Fixtures};
pub use internal::requester::{ApiRequest, ApiResponse, Executor, HttpRequester, Method};
pub use internal::schema::{SchemaError, SchemaLoader};
pub use internal::suite::{catalog, run_case, run_suite, TestCase};
