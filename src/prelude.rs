//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used items from this crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use mutation_workbench::prelude::*;
//! ```

pub use crate::harness::candidate::MutantCandidate;
pub use crate::harness::registry::{RegistryError, SymbolTable};
pub use crate::harness::report::{ReportFormat, RunReport, Verdict, render_report};
pub use crate::harness::runner::{HarnessError, MutantOutcome, RunResult, RunWarning, run};
pub use crate::harness::suite::{
    CheckError, CheckResult, TestCase, TestOutcome, check, check_close, check_eq, check_rejects,
};
pub use crate::harness::value::{CallError, NativeFn, Value, native};
