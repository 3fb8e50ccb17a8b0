pub mod grade;
pub mod table;

pub use grade::{BELOW_MINIMUM_GRADE, GradeOutcome, compute_grade, percentage};
pub use table::{PaperPick, aggregate_highest, resolve_cutoff_table, select_paper};

use tracing::info;

use crate::catalog;
use crate::model::{CutoffDataset, GradeError, Query};
use crate::report::GradeReport;

/// Resolves the cutoff table for `query` and grades `score` against it.
///
/// Without an explicit `full_mark` the catalog default for the resolved paper
/// is used.
pub fn grade_score(
    dataset: &CutoffDataset,
    query: &Query,
    score: f64,
    full_mark: Option<f64>,
) -> Result<GradeReport, GradeError> {
    if !score.is_finite() {
        return Err(GradeError::InvalidInput(format!(
            "score must be a finite number, got {score}"
        )));
    }

    let table = resolve_cutoff_table(dataset, query)?;
    let full_mark = match full_mark {
        Some(v) => v,
        None => catalog::default_full_mark(&query.subject, Some(&table.paper_key)).ok_or_else(
            || {
                GradeError::InvalidInput(format!(
                    "no default full mark for {} {}; give one explicitly",
                    query.subject, table.paper_key
                ))
            },
        )?,
    };

    let percentage = percentage(score, full_mark)?;
    let outcome = compute_grade(&table, percentage);
    info!(
        "{} {} ({}): {:.2}% -> {}",
        query.subject, table.paper_key, query.year, percentage, outcome.grade
    );

    Ok(GradeReport {
        subject: query.subject.clone(),
        paper: table.paper_key,
        year: query.year.to_string(),
        aggregate: query.year.is_aggregate(),
        score,
        full_mark,
        percentage,
        grade: outcome.grade,
        cutoff_table_used: outcome.sorted_cutoffs,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/resolve/tests.rs"]
mod tests;
