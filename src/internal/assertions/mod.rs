pub mod check;
pub mod error;
pub mod expectation;

pub use check::{check, check_all};
pub use error::{AssertionError, CaseFailure};
pub use expectation::Expectation;
