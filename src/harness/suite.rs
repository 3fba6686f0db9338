//! Test cases with tagged outcomes.
//!
//! A test case is a named check over the injected symbol table. Execution
//! never unwinds into the runner: checks report failure through
//! [`CheckError`], and a panicking check is caught and classified as an
//! error outcome.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use thiserror::Error;

use super::registry::SymbolTable;
use super::value::{CallError, Value};

/// Failure reported by a check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// An assertion did not hold.
    #[error("{0}")]
    Assertion(String),
    /// A target-function invocation failed unexpectedly.
    #[error(transparent)]
    Call(#[from] CallError),
}

/// Result of a single check body.
pub type CheckResult = Result<(), CheckError>;

/// Outcome of executing one test case against the current table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// All assertions held.
    Pass,
    /// An assertion was violated.
    Fail {
        /// What the assertion reported.
        reason: String,
    },
    /// The check raised something other than an assertion failure.
    Error {
        /// What went wrong.
        cause: String,
    },
}

impl TestOutcome {
    /// Whether this outcome counts as evidence that a mutant was detected.
    /// Both failures and errors do.
    pub fn is_detection(&self) -> bool {
        !matches!(self, TestOutcome::Pass)
    }
}

/// Named executable check.
#[derive(Clone)]
pub struct TestCase {
    name: String,
    check: Arc<dyn Fn(&SymbolTable) -> CheckResult + Send + Sync>,
}

impl TestCase {
    /// Build a test case from a name and a check body.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&SymbolTable) -> CheckResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Test case name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute the check against `table` and classify the result.
    pub fn invoke(&self, table: &SymbolTable) -> TestOutcome {
        match catch_unwind(AssertUnwindSafe(|| (self.check)(table))) {
            Ok(Ok(())) => TestOutcome::Pass,
            Ok(Err(CheckError::Assertion(reason))) => TestOutcome::Fail { reason },
            Ok(Err(CheckError::Call(cause))) => TestOutcome::Error {
                cause: cause.to_string(),
            },
            Err(payload) => TestOutcome::Error {
                cause: panic_message(payload),
            },
        }
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}

/// Assert `condition`, failing with `reason` otherwise.
pub fn check(condition: bool, reason: impl Into<String>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(CheckError::Assertion(reason.into()))
    }
}

/// Assert exact equality.
pub fn check_eq<T>(actual: T, expected: T) -> CheckResult
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "expected {expected:?}, got {actual:?}"
        )))
    }
}

/// Assert a numeric value is within `tolerance` of `expected`.
pub fn check_close(actual: Value, expected: f64, tolerance: f64) -> CheckResult {
    let Some(actual) = actual.as_f64() else {
        return Err(CheckError::Assertion(format!(
            "expected a number close to {expected}, got {actual:?}"
        )));
    };
    if (actual - expected).abs() < tolerance {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "{actual} differs from {expected} by more than {tolerance}"
        )))
    }
}

/// Assert that an invocation was rejected with a domain-level failure.
pub fn check_rejects(result: Result<Value, CallError>) -> CheckResult {
    match result {
        Err(_) => Ok(()),
        Ok(value) => Err(CheckError::Assertion(format!(
            "expected the call to be rejected, got {value:?}"
        ))),
    }
}
