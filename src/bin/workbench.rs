use anyhow::Result;
use clap::{Parser, ValueEnum};

use mutation_workbench::fixtures::{calculator, converter};
use mutation_workbench::harness::candidate::MutantCandidate;
use mutation_workbench::harness::registry::SymbolTable;
use mutation_workbench::harness::report::{ReportFormat, render_report};
use mutation_workbench::harness::runner::run;
use mutation_workbench::harness::suite::TestCase;

#[derive(Debug, Parser)]
#[command(name = "mutation-workbench")]
#[command(about = "Evaluate the bundled demo test suites against curated mutants")]
struct Cli {
    /// Fixture module to evaluate.
    #[arg(long, value_enum, default_value = "all")]
    module: ModuleArg,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModuleArg {
    /// Calculator fixture.
    Calculator,
    /// Unit-converter fixture.
    Converter,
    /// Every bundled fixture.
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text
    Text,
    /// Markdown
    Md,
    /// JSON
    Json,
}

fn evaluate(
    mut table: SymbolTable,
    candidates: Vec<MutantCandidate>,
    suite: Vec<TestCase>,
    format: ReportFormat,
) -> Result<()> {
    eprintln!(
        "mutation-workbench: evaluating {} mutant(s) against {}",
        candidates.len(),
        table.module()
    );
    let result = run(&mut table, &candidates, &suite)?;
    print!("{}", render_report(&result, format));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = match cli.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Md => ReportFormat::Markdown,
        OutputFormat::Json => ReportFormat::Json,
    };

    if matches!(cli.module, ModuleArg::Calculator | ModuleArg::All) {
        evaluate(
            calculator::symbol_table(),
            calculator::mutants(),
            calculator::test_suite(),
            format,
        )?;
    }
    if matches!(cli.module, ModuleArg::Converter | ModuleArg::All) {
        evaluate(
            converter::symbol_table(),
            converter::mutants(),
            converter::test_suite(),
            format,
        )?;
    }

    Ok(())
}
