pub mod case;
pub mod catalog;
pub mod runner;

pub use case::TestCase;
pub use catalog::{catalog, select};
pub use runner::{run_case, run_suite, CaseReport, SuiteReport};
