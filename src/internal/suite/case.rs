// src/internal/suite/case.rs

use crate::internal::assertions::Expectation;
use crate::internal::requester::ApiRequest;

/// One independent request/assertion unit
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub request: ApiRequest,
    /// Checked in order; the first failure ends the case
    pub expectations: Vec<Expectation>,
}

impl TestCase {
    pub fn new(name: impl Into<String>, request: ApiRequest) -> Self {
        Self {
            name: name.into(),
            request,
            expectations: Vec::new(),
        }
    }

    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    pub fn expect_status(self, status: u16) -> Self {
        self.expect(Expectation::Status(status))
    }

    pub fn expect_schema(self, name: impl Into<String>) -> Self {
        self.expect(Expectation::schema(name))
    }
}
