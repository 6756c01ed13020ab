//! Plain-text rendering of an analysis report.

use std::fmt::Write;

use genolab_common::entities::AnalysisReport;

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Original DNA:      {}", report.original_dna);
    let _ = writeln!(out, "Mutated DNA:       {}", report.mutated_dna);
    let _ = writeln!(out, "Original protein:  {}", report.original_protein);
    let _ = writeln!(out, "Mutated protein:   {}", report.mutated_protein);
    let _ = writeln!(out, "{}", report.impact.description());
    let _ = writeln!(out);

    let _ = writeln!(out, "== Clinical report ==");
    let _ = writeln!(out, "Status:            {}", report.risk.tier);
    let _ = writeln!(out, "Pathogenicity:     {}%", report.risk.score_percent());
    let _ = writeln!(out, "Recommendation:    {}", report.risk.action);
    match &report.pharmacogenomics {
        Some(pgx) => {
            let _ = writeln!(out, "Pharma alert:      {} ({})", pgx.drug, pgx.effect);
            let _ = writeln!(out, "Advice:            {}", pgx.advice);
        }
        None => {
            let _ = writeln!(out, "Pharma alert:      none (empty protein)");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "== Hereditary risk ==");
    let _ = writeln!(out, "Pattern:           {}", report.hereditary.pattern);
    let _ = writeln!(out, "Sibling risk:      {}", report.hereditary.sibling_risk);
    let _ = writeln!(out, "Offspring risk:    {}", report.hereditary.offspring_risk);
    let _ = writeln!(out, "Counseling note:   {}", report.hereditary.note);
    let _ = writeln!(out);

    let _ = writeln!(out, "== Screening priority ==");
    for entry in &report.screening {
        let _ = writeln!(out, "{:<8} {:<5} {:?}", entry.relation, entry.risk, entry.priority);
    }

    out
}
