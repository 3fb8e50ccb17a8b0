pub mod json;
pub mod text;

use serde::Serialize;

use crate::catalog;
use crate::model::{CutoffDataset, CutoffTable, GradeCutoff, Query};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub subject: String,
    pub paper: String,
    pub year: String,
    pub aggregate: bool,
    pub score: f64,
    pub full_mark: f64,
    pub percentage: f64,
    pub grade: String,
    pub cutoff_table_used: Vec<GradeCutoff>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    pub subject: String,
    pub paper: String,
    pub year: String,
    pub aggregate: bool,
    pub cutoffs: Vec<GradeCutoff>,
}

impl TableReport {
    pub fn new(query: &Query, table: &CutoffTable) -> Self {
        Self {
            subject: query.subject.clone(),
            paper: table.paper_key.clone(),
            year: query.year.to_string(),
            aggregate: query.year.is_aggregate(),
            cutoffs: table.sorted_desc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectSummary {
    pub code: String,
    pub name: Option<&'static str>,
    pub years: Vec<String>,
}

pub fn summarize_subjects(dataset: &CutoffDataset) -> Vec<SubjectSummary> {
    dataset
        .subjects()
        .map(|(code, years)| SubjectSummary {
            code: code.to_string(),
            name: catalog::subject(code).map(|s| s.name),
            years: years.keys().map(str::to_string).collect(),
        })
        .collect()
}

pub fn format_percent(v: f64) -> String {
    format!("{:.2}%", v)
}

pub fn year_heading(year: &str, aggregate: bool) -> String {
    if aggregate {
        "Historical highest cutoffs".to_string()
    } else {
        format!("{year} cutoffs")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
