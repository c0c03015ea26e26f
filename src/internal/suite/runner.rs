// src/internal/suite/runner.rs

use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::case::TestCase;
use crate::internal::assertions::{check_all, CaseFailure};
use crate::internal::requester::Executor;
use crate::internal::schema::SchemaLoader;

#[derive(Debug)]
pub struct CaseReport {
    pub name: String,
    pub elapsed: Duration,
    pub outcome: Result<(), CaseFailure>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn status_label(&self) -> &'static str {
        match &self.outcome {
            Ok(()) => "ok",
            Err(failure) => failure.kind(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    /// In catalog order, regardless of completion order
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CaseFailure)> {
        self.cases
            .iter()
            .filter_map(|c| c.outcome.as_ref().err().map(|f| (c.name.as_str(), f)))
    }
}

/// Execute one case: send its request, then check its expectations in order
pub async fn run_case<E: Executor + ?Sized>(
    executor: &E,
    loader: &SchemaLoader,
    case: &TestCase,
) -> CaseReport {
    info!(case = %case.name, "{} {}", case.request.method, case.request.path);
    let started = Instant::now();

    let outcome = match executor.execute(&case.request).await {
        Ok(response) => check_all(&response, &case.expectations, loader),
        Err(e) => Err(CaseFailure::Transport(e)),
    };
    let elapsed = started.elapsed();

    match &outcome {
        Ok(()) => info!(case = %case.name, elapsed_ms = elapsed.as_millis() as u64, "passed"),
        Err(failure) => warn!(case = %case.name, kind = failure.kind(), "{}", failure),
    }

    CaseReport {
        name: case.name.clone(),
        elapsed,
        outcome,
    }
}

/// Run independent cases with at most `concurrency` in flight
pub async fn run_suite<E: Executor + ?Sized>(
    executor: &E,
    loader: &SchemaLoader,
    cases: &[TestCase],
    concurrency: usize,
) -> SuiteReport {
    let cases = stream::iter(cases)
        .map(|case| run_case(executor, loader, case))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    SuiteReport { cases }
}
