use tracing::debug;

use crate::model::{
    CutoffDataset, CutoffTable, GradeCutoffs, GradeError, PaperCutoffs, Query, SubjectCutoffs,
    TOTAL_PAPER, YearSelector,
};

/// Which rule picked the paper out of a year's cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperPick {
    Requested,
    Total,
    First,
}

pub fn resolve_cutoff_table(
    dataset: &CutoffDataset,
    query: &Query,
) -> Result<CutoffTable, GradeError> {
    let years = dataset.subject(&query.subject).ok_or_else(|| {
        GradeError::NotFound(format!("no cutoff data for subject {}", query.subject))
    })?;

    match &query.year {
        YearSelector::AggregateHighest => {
            let highest = aggregate_highest(years);
            debug!(
                "aggregated {} years of {} into {} papers",
                years.len(),
                query.subject,
                highest.len()
            );
            table_from_papers(&highest, query)
        }
        YearSelector::Year(year) => {
            let papers = years.get(year).ok_or_else(|| {
                GradeError::NotFound(format!(
                    "no cutoff data for subject {} in {}",
                    query.subject, year
                ))
            })?;
            table_from_papers(papers, query)
        }
    }
}

/// Folds every year of a subject into one set of papers, keeping the highest
/// non-null cutoff per paper and grade. Keys appear in first-seen order.
pub fn aggregate_highest(years: &SubjectCutoffs) -> PaperCutoffs {
    let mut highest = PaperCutoffs::new();
    for (_, papers) in years.iter() {
        for (paper_key, grades) in papers.iter() {
            let slot = highest.get_or_insert_with(paper_key, GradeCutoffs::new);
            for (grade, value) in grades.iter() {
                let Some(value) = *value else {
                    continue;
                };
                let current = slot.get_or_insert_with(grade, || None);
                if current.is_none_or(|c| value > c) {
                    *current = Some(value);
                }
            }
        }
    }
    highest
}

/// Requested paper if present, else "total", else the first paper listed.
pub fn select_paper<'a>(
    papers: &'a PaperCutoffs,
    requested: Option<&str>,
) -> Option<(PaperPick, &'a str, &'a GradeCutoffs)> {
    if let Some((key, grades)) = requested.and_then(|p| papers.get_key_value(p)) {
        return Some((PaperPick::Requested, key, grades));
    }
    if let Some((key, grades)) = papers.get_key_value(TOTAL_PAPER) {
        return Some((PaperPick::Total, key, grades));
    }
    papers
        .first()
        .map(|(key, grades)| (PaperPick::First, key, grades))
}

fn table_from_papers(papers: &PaperCutoffs, query: &Query) -> Result<CutoffTable, GradeError> {
    let requested = query.requested_paper();
    let (pick, key, grades) = select_paper(papers, requested).ok_or_else(|| {
        GradeError::NotFound(format!(
            "no paper cutoffs for subject {} ({})",
            query.subject, query.year
        ))
    })?;
    if let Some(requested) = requested.filter(|_| pick != PaperPick::Requested) {
        debug!("paper {requested} not listed; falling back to {key} ({pick:?})");
    }
    Ok(CutoffTable::from_grades(key, grades))
}
