use serde::Serialize;

use crate::report::{GradeReport, SubjectSummary, TableReport};

pub fn render_grade_json(report: &GradeReport) -> Result<String, serde_json::Error> {
    render(report)
}

pub fn render_table_json(report: &TableReport) -> Result<String, serde_json::Error> {
    render(report)
}

pub fn render_subjects_json(subjects: &[SubjectSummary]) -> Result<String, serde_json::Error> {
    render(&subjects)
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
