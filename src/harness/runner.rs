//! Mutation run orchestration: substitute, execute, classify, restore.

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use serde::Serialize;
use thiserror::Error;

use super::candidate::MutantCandidate;
use super::registry::{RegistryError, SymbolTable};
use super::report::RunReport;
use super::suite::{TestCase, TestOutcome};

/// Run orchestration errors. Any of these aborts the whole run: a missing
/// target symbol or a failed restoration would silently invalidate every
/// downstream classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Registry error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Classification of one mutant after the suite ran against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutantOutcome {
    /// Candidate label.
    pub label: String,
    /// Symbol the candidate replaced.
    pub target_symbol: String,
    /// True when at least one test case failed or errored.
    pub killed: bool,
    /// Carried over from the candidate's a-priori equivalence marker.
    pub equivalent: bool,
    /// Per-test log lines captured during execution. Never consulted for
    /// classification; kept so a survivor can be diagnosed.
    pub captured_log: String,
}

/// Non-fatal misconfiguration signals surfaced alongside the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunWarning {
    /// The suite had no test cases, so every mutant trivially survived.
    EmptySuite,
}

impl std::fmt::Display for RunWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunWarning::EmptySuite => {
                write!(f, "test suite is empty; every mutant trivially survives")
            }
        }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Per-mutant classifications, in candidate order.
    pub outcomes: Vec<MutantOutcome>,
    /// Misconfiguration warnings.
    pub warnings: Vec<RunWarning>,
    /// Aggregated counts and rates.
    pub report: RunReport,
}

/// Evaluate every candidate against the suite, in order.
///
/// Per candidate: capture the original binding, swap the replacement in,
/// execute the suite, swap the original back, record the classification.
/// The original is restored on every exit path; if suite execution panics
/// outside the contained per-test handling, the table is restored before
/// the panic resumes.
///
/// A mutant is killed when at least one test case fails or errors, and
/// survives only when every case passes. Remaining cases are skipped after
/// the first detection; classification does not depend on that shortcut.
pub fn run(
    table: &mut SymbolTable,
    candidates: &[MutantCandidate],
    suite: &[TestCase],
) -> Result<RunResult, HarnessError> {
    let mut warnings = Vec::new();
    if suite.is_empty() {
        warnings.push(RunWarning::EmptySuite);
    }

    let mut outcomes = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let original = table.snapshot(candidate.target_symbol())?;
        table.replace(candidate.target_symbol(), candidate.replacement());

        let executed = catch_unwind(AssertUnwindSafe(|| execute_suite(&*table, suite)));

        table.restore(original)?;

        let (killed, captured_log) = match executed {
            Ok(result) => result,
            Err(payload) => resume_unwind(payload),
        };

        outcomes.push(MutantOutcome {
            label: candidate.label().to_string(),
            target_symbol: candidate.target_symbol().to_string(),
            killed,
            equivalent: candidate.is_equivalent(),
            captured_log,
        });
    }

    let report = RunReport::from_outcomes(&outcomes);
    Ok(RunResult {
        outcomes,
        warnings,
        report,
    })
}

fn execute_suite(table: &SymbolTable, suite: &[TestCase]) -> (bool, String) {
    let mut log = String::new();
    for case in suite {
        let outcome = case.invoke(table);
        match &outcome {
            TestOutcome::Pass => {
                log.push_str(&format!("test {}: pass\n", case.name()));
            }
            TestOutcome::Fail { reason } => {
                log.push_str(&format!("test {}: FAIL ({reason})\n", case.name()));
            }
            TestOutcome::Error { cause } => {
                log.push_str(&format!("test {}: ERROR ({cause})\n", case.name()));
            }
        }
        if outcome.is_detection() {
            return (true, log);
        }
    }
    (false, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::suite::{check_close, check_eq};
    use crate::harness::value::{CallError, Value, native};

    fn calculator_table() -> SymbolTable {
        let mut table = SymbolTable::new("calculator");
        table.bind(
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                Ok(Value::Float(base.powf(exponent)))
            }),
        );
        table
    }

    fn power_suite() -> Vec<TestCase> {
        vec![TestCase::new("power_zero_exponent", |table: &SymbolTable| {
            let out = table.call("power", &[Value::Float(5.0), Value::Float(0.0)])?;
            check_eq(out, Value::Float(1.0))
        })]
    }

    fn always_zero() -> MutantCandidate {
        MutantCandidate::new(
            "always return 0",
            "power",
            native(|_| Ok(Value::Float(0.0))),
        )
    }

    #[test]
    fn detected_mutant_is_killed() {
        let mut table = calculator_table();
        let result = run(&mut table, &[always_zero()], &power_suite()).expect("run completes");

        assert_eq!(result.report.total, 1);
        assert_eq!(result.report.killed, 1);
        assert_eq!(result.report.kill_rate, 1.0);
        assert!(result.outcomes[0].killed);
        assert!(result.outcomes[0].captured_log.contains("FAIL"));
    }

    #[test]
    fn identical_replacement_survives() {
        let mut table = calculator_table();
        let twin = MutantCandidate::new(
            "behaviorally identical",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                Ok(Value::Float(base.powf(exponent)))
            }),
        );

        let result = run(&mut table, &[twin], &power_suite()).expect("run completes");
        assert!(!result.outcomes[0].killed);
        assert_eq!(result.report.survived, 1);
    }

    #[test]
    fn empty_candidate_list_reports_zeros() {
        let mut table = calculator_table();
        let result = run(&mut table, &[], &power_suite()).expect("run completes");

        assert_eq!(result.report.total, 0);
        assert_eq!(result.report.killed, 0);
        assert_eq!(result.report.survived, 0);
        assert_eq!(result.report.kill_rate, 0.0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_suite_warns_and_every_mutant_survives() {
        let mut table = calculator_table();
        let result = run(&mut table, &[always_zero()], &[]).expect("run completes");

        assert_eq!(result.warnings, vec![RunWarning::EmptySuite]);
        assert!(!result.outcomes[0].killed);
        assert_eq!(result.report.survived, 1);
    }

    #[test]
    fn missing_target_symbol_aborts_the_run() {
        let mut table = calculator_table();
        let typo = MutantCandidate::new("typo", "pwoer", native(|_| Ok(Value::Unit)));

        let err = run(&mut table, &[typo], &power_suite()).expect_err("run aborts");
        assert!(matches!(
            err,
            HarnessError::Registry(RegistryError::SymbolNotFound { .. })
        ));
    }

    #[test]
    fn table_is_restored_after_each_mutant() {
        let mut table = calculator_table();
        let baseline = table.call("power", &[Value::Float(2.0), Value::Float(10.0)]);

        run(&mut table, &[always_zero()], &power_suite()).expect("run completes");

        let after = table.call("power", &[Value::Float(2.0), Value::Float(10.0)]);
        assert_eq!(after, baseline);
        assert_eq!(after, Ok(Value::Float(1024.0)));
    }

    #[test]
    fn table_is_restored_even_when_checks_panic() {
        let mut table = calculator_table();
        let baseline = table.call("power", &[Value::Float(2.0), Value::Float(10.0)]);
        let panicking_suite = vec![TestCase::new("explodes", |_: &SymbolTable| {
            panic!("internal check bug")
        })];

        let result =
            run(&mut table, &[always_zero()], &panicking_suite).expect("run completes");
        assert!(result.outcomes[0].killed);

        let after = table.call("power", &[Value::Float(2.0), Value::Float(10.0)]);
        assert_eq!(after, baseline);
    }

    #[test]
    fn later_mutants_run_against_the_original_implementation() {
        let mut table = calculator_table();
        // If restoration were skipped, the second candidate would be layered
        // on top of "always return 0" and this identical twin would survive
        // against the wrong baseline.
        let twin = MutantCandidate::new(
            "identical twin",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                Ok(Value::Float(base.powf(exponent)))
            }),
        );

        let result = run(
            &mut table,
            &[always_zero(), twin],
            &power_suite(),
        )
        .expect("run completes");

        assert!(result.outcomes[0].killed);
        assert!(!result.outcomes[1].killed);
    }

    #[test]
    fn wrong_arity_replacement_counts_as_killed() {
        let mut table = calculator_table();
        let wrong_arity = MutantCandidate::new(
            "ternary power",
            "power",
            native(|args| {
                if args.len() != 3 {
                    return Err(CallError::Arity {
                        expected: 3,
                        got: args.len(),
                    });
                }
                Ok(Value::Unit)
            }),
        );

        let result = run(&mut table, &[wrong_arity], &power_suite()).expect("run completes");
        assert!(result.outcomes[0].killed);
        assert!(result.outcomes[0].captured_log.contains("ERROR"));
    }

    #[test]
    fn execution_stops_at_the_first_detection() {
        let mut table = calculator_table();
        let suite = vec![
            TestCase::new("first", |table: &SymbolTable| {
                let out = table.call("power", &[Value::Float(5.0), Value::Float(0.0)])?;
                check_eq(out, Value::Float(1.0))
            }),
            TestCase::new("second", |table: &SymbolTable| {
                let out = table.call("power", &[Value::Float(2.0), Value::Float(3.0)])?;
                check_close(out, 8.0, 1e-9)
            }),
        ];

        let result = run(&mut table, &[always_zero()], &suite).expect("run completes");
        let log = &result.outcomes[0].captured_log;
        assert!(log.contains("test first: FAIL"));
        assert!(!log.contains("test second"));
    }
}
