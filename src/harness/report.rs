//! Kill-rate aggregation and report rendering.

use serde::Serialize;

use super::runner::{MutantOutcome, RunResult};

/// Qualitative summary of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every mutant was detected.
    AllKilled,
    /// No mutant was detected.
    NoneKilled,
    /// Some mutants were detected, some survived.
    Partial,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::AllKilled => write!(f, "all mutants killed"),
            Verdict::NoneKilled => write!(f, "no mutants killed"),
            Verdict::Partial => write!(f, "partial"),
        }
    }
}

/// Aggregated counts for one run. Derived once from the outcome list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Number of candidates evaluated.
    pub total: usize,
    /// Candidates detected by the suite.
    pub killed: usize,
    /// Candidates the suite let through.
    pub survived: usize,
    /// Candidates declared equivalent a priori.
    pub equivalent: usize,
    /// `killed / total`; `0` for an empty run.
    pub kill_rate: f64,
    /// Kill rate over the non-equivalent subset, present only when at
    /// least one candidate was declared equivalent.
    pub adjusted_kill_rate: Option<f64>,
    /// Qualitative verdict.
    pub verdict: Verdict,
}

impl RunReport {
    /// Aggregate an outcome list into counts and rates.
    pub fn from_outcomes(outcomes: &[MutantOutcome]) -> Self {
        let total = outcomes.len();
        let killed = outcomes.iter().filter(|o| o.killed).count();
        let survived = total - killed;
        let equivalent = outcomes.iter().filter(|o| o.equivalent).count();

        let kill_rate = if total == 0 {
            0.0
        } else {
            killed as f64 / total as f64
        };

        let adjusted_kill_rate = if equivalent > 0 {
            let real_total = total - equivalent;
            let real_killed = outcomes
                .iter()
                .filter(|o| o.killed && !o.equivalent)
                .count();
            Some(if real_total == 0 {
                0.0
            } else {
                real_killed as f64 / real_total as f64
            })
        } else {
            None
        };

        let verdict = if killed == total {
            Verdict::AllKilled
        } else if killed == 0 {
            Verdict::NoneKilled
        } else {
            Verdict::Partial
        };

        Self {
            total,
            killed,
            survived,
            equivalent,
            kill_rate,
            adjusted_kill_rate,
            verdict,
        }
    }
}

/// Supported output formats for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text: one line per mutant, then a summary block.
    Text,
    /// Markdown summary.
    Markdown,
    /// JSON with all mutants inline.
    Json,
}

/// Render a run result in the requested format. Pure function of the run
/// data; performs no IO.
pub fn render_report(result: &RunResult, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(result),
        ReportFormat::Markdown => render_markdown(result),
        ReportFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "summary": result.report,
            "warnings": result.warnings,
            "mutants": result.outcomes,
        }))
        .expect("run report should serialize"),
    }
}

fn verdict_line(outcome: &MutantOutcome) -> String {
    let verdict = if outcome.killed { "killed" } else { "survived" };
    let marker = if outcome.equivalent {
        " [equivalent]"
    } else {
        ""
    };
    format!(
        "mutant `{}` ({}): {verdict}{marker}",
        outcome.label, outcome.target_symbol
    )
}

fn render_text(result: &RunResult) -> String {
    let mut out = String::new();

    for outcome in &result.outcomes {
        out.push_str(&verdict_line(outcome));
        out.push('\n');
    }

    for warning in &result.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }

    let report = &result.report;
    out.push_str(&format!(
        "killed: {}/{} ({:.1}%)\n",
        report.killed,
        report.total,
        report.kill_rate * 100.0
    ));
    if let Some(adjusted) = report.adjusted_kill_rate {
        out.push_str(&format!(
            "adjusted: {:.1}% over {} non-equivalent mutant(s)\n",
            adjusted * 100.0,
            report.total - report.equivalent
        ));
    }
    out.push_str(&format!("verdict: {}\n", report.verdict));

    out
}

fn render_markdown(result: &RunResult) -> String {
    let report = &result.report;
    let mut out = String::from("# Mutation Run\n\n");

    out.push_str("## Summary\n\n| metric | value |\n|---|---:|\n");
    out.push_str(&format!("| total | {} |\n", report.total));
    out.push_str(&format!("| killed | {} |\n", report.killed));
    out.push_str(&format!("| survived | {} |\n", report.survived));
    out.push_str(&format!("| equivalent | {} |\n", report.equivalent));
    out.push_str(&format!(
        "| kill rate | {:.1}% |\n",
        report.kill_rate * 100.0
    ));
    if let Some(adjusted) = report.adjusted_kill_rate {
        out.push_str(&format!("| adjusted kill rate | {:.1}% |\n", adjusted * 100.0));
    }
    out.push_str(&format!("| verdict | {} |\n", report.verdict));

    if !result.warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for warning in &result.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }

    if !result.outcomes.is_empty() {
        out.push_str("\n## Mutants\n\n");
        for outcome in &result.outcomes {
            out.push_str(&format!("### {}\n\n", outcome.label));
            out.push_str(&format!("- **target**: {}\n", outcome.target_symbol));
            out.push_str(&format!(
                "- **status**: {}\n",
                if outcome.killed { "killed" } else { "survived" }
            ));
            if outcome.equivalent {
                out.push_str("- **equivalent**: yes\n");
            }
            if !outcome.captured_log.is_empty() {
                out.push_str("\n```\n");
                out.push_str(&outcome.captured_log);
                out.push_str("```\n");
            }
            out.push('\n');
        }
    }

    out
}
