//! Full-protocol scenarios over the public API.

use proptest::prelude::*;

use mutation_workbench::fixtures::{calculator, converter};
use mutation_workbench::harness::candidate::MutantCandidate;
use mutation_workbench::harness::report::{ReportFormat, Verdict, render_report};
use mutation_workbench::harness::runner::{RunWarning, run};
use mutation_workbench::harness::suite::{TestCase, check_close, check_eq};
use mutation_workbench::harness::value::{CallError, Value, native};
use mutation_workbench::harness::SymbolTable;

fn always_zero_power() -> MutantCandidate {
    MutantCandidate::new(
        "always return 0",
        "power",
        native(|_| Ok(Value::Float(0.0))),
    )
}

fn miles_coefficient_mutant(coefficient: f64) -> MutantCandidate {
    MutantCandidate::new(
        format!("coefficient {coefficient}"),
        "miles_to_kilometers",
        native(move |args| {
            let miles = args[0].number(0)?;
            if miles < 0.0 {
                return Err(CallError::domain("distance cannot be negative"));
            }
            Ok(Value::Float(miles * coefficient))
        }),
    )
}

fn miles_tolerance_suite(tolerance: f64) -> Vec<TestCase> {
    vec![TestCase::new("one_mile_within_tolerance", move |t: &SymbolTable| {
        check_close(
            t.call("miles_to_kilometers", &[Value::Float(1.0)])?,
            converter::MILES_TO_KM,
            tolerance,
        )
    })]
}

#[test]
fn zero_exponent_mutant_is_killed() {
    let mut table = calculator::symbol_table();
    let suite = vec![TestCase::new("power_zero_exponent", |t: &SymbolTable| {
        check_eq(
            t.call("power", &[Value::Float(5.0), Value::Float(0.0)])?,
            Value::Float(1.0),
        )
    })];

    let result = run(&mut table, &[always_zero_power()], &suite).expect("run completes");
    assert_eq!(result.report.total, 1);
    assert_eq!(result.report.killed, 1);
    assert_eq!(result.report.kill_rate, 1.0);
}

#[test]
fn tight_tolerance_kills_the_wrong_coefficient() {
    let mut table = converter::symbol_table();
    let result = run(
        &mut table,
        &[miles_coefficient_mutant(1.5)],
        &miles_tolerance_suite(0.001),
    )
    .expect("run completes");

    assert!(result.outcomes[0].killed);
}

#[test]
fn loose_tolerance_lets_the_wrong_coefficient_survive() {
    // 1.5 misconverts one mile by ~0.109 km; a tolerance wider than that
    // cannot see the defect. This is the false negative a sloppy suite buys.
    let mut table = converter::symbol_table();
    let result = run(
        &mut table,
        &[miles_coefficient_mutant(1.5)],
        &miles_tolerance_suite(0.15),
    )
    .expect("run completes");

    assert!(!result.outcomes[0].killed);
    assert_eq!(result.report.verdict, Verdict::NoneKilled);
}

#[test]
fn near_coefficient_survives_a_tenth_tolerance() {
    let mut table = converter::symbol_table();
    let result = run(
        &mut table,
        &[miles_coefficient_mutant(1.6)],
        &miles_tolerance_suite(0.1),
    )
    .expect("run completes");

    assert!(!result.outcomes[0].killed);
}

#[test]
fn empty_suite_surfaces_a_warning_and_full_survival() {
    let mut table = converter::symbol_table();
    let result = run(&mut table, &converter::mutants(), &[]).expect("run completes");

    assert_eq!(result.warnings, vec![RunWarning::EmptySuite]);
    assert_eq!(result.report.killed, 0);
    assert_eq!(result.report.survived, result.report.total);

    let text = render_report(&result, ReportFormat::Text);
    assert!(text.contains("warning: test suite is empty"));
}

#[test]
fn fixture_run_renders_a_complete_text_report() {
    let mut table = calculator::symbol_table();
    let result = run(
        &mut table,
        &calculator::mutants(),
        &calculator::test_suite(),
    )
    .expect("run completes");
    let text = render_report(&result, ReportFormat::Text);

    assert!(text.contains("mutant `power: zero exponent yields 0` (power): killed"));
    assert!(
        text.contains("mutant `power: zero exponent short circuit` (power): survived [equivalent]")
    );
    assert!(text.contains("killed: 6/7 (85.7%)"));
    assert!(text.contains("adjusted: 100.0% over 6 non-equivalent mutant(s)"));
    assert!(text.contains("verdict: partial"));
}

#[test]
fn tables_are_identical_before_and_after_a_run() {
    let mut table = calculator::symbol_table();
    let probes: Vec<(&str, f64, f64)> = vec![
        ("add", 2.0, 3.0),
        ("subtract", 9.0, 4.0),
        ("multiply", 6.0, 7.0),
        ("divide", 9.0, 3.0),
        ("modulo", 17.0, 5.0),
        ("power", 2.0, 10.0),
    ];
    let baseline: Vec<_> = probes
        .iter()
        .map(|(symbol, a, b)| table.call(symbol, &[Value::Float(*a), Value::Float(*b)]))
        .collect();

    run(
        &mut table,
        &calculator::mutants(),
        &calculator::test_suite(),
    )
    .expect("run completes");

    let after: Vec<_> = probes
        .iter()
        .map(|(symbol, a, b)| table.call(symbol, &[Value::Float(*a), Value::Float(*b)]))
        .collect();
    assert_eq!(after, baseline);
}

proptest! {
    #[test]
    fn behaviorally_identical_replacements_always_survive(k in -1.0e6f64..1.0e6) {
        let mut table = SymbolTable::new("scaled");
        table.bind(
            "scale",
            native(move |args| Ok(Value::Float(args[0].number(0)? * k))),
        );
        let twin = MutantCandidate::new(
            "identical twin",
            "scale",
            native(move |args| Ok(Value::Float(args[0].number(0)? * k))),
        );
        let suite = vec![TestCase::new("scales_three", move |t: &SymbolTable| {
            check_eq(t.call("scale", &[Value::Float(3.0)])?, Value::Float(3.0 * k))
        })];

        let result = run(&mut table, &[twin], &suite).expect("run completes");
        prop_assert!(!result.outcomes[0].killed);
    }

    #[test]
    fn divergent_replacements_are_always_killed(k in -1.0e3f64..1.0e3) {
        let mut table = SymbolTable::new("scaled");
        table.bind(
            "scale",
            native(move |args| Ok(Value::Float(args[0].number(0)? * k))),
        );
        let skewed = MutantCandidate::new(
            "skewed by one",
            "scale",
            native(move |args| Ok(Value::Float(args[0].number(0)? * k + 1.0))),
        );
        let suite = vec![TestCase::new("scales_three", move |t: &SymbolTable| {
            check_close(t.call("scale", &[Value::Float(3.0)])?, 3.0 * k, 0.5)
        })];

        let result = run(&mut table, &[skewed], &suite).expect("run completes");
        prop_assert!(result.outcomes[0].killed);
    }

    #[test]
    fn restoration_holds_for_any_number_of_repeated_candidates(n in 0usize..8) {
        let mut table = calculator::symbol_table();
        let candidates: Vec<MutantCandidate> =
            (0..n).map(|_| always_zero_power()).collect();
        let suite = calculator::test_suite();

        let baseline = table.call("power", &[Value::Float(3.0), Value::Float(4.0)]);
        let result = run(&mut table, &candidates, &suite).expect("run completes");

        prop_assert_eq!(result.report.total, n);
        prop_assert_eq!(result.report.killed, n);
        prop_assert_eq!(
            table.call("power", &[Value::Float(3.0), Value::Float(4.0)]),
            baseline
        );
    }
}
