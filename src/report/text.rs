use crate::model::GradeCutoff;
use crate::report::{GradeReport, SubjectSummary, TableReport, format_percent, year_heading};

pub fn render_grade_text(report: &GradeReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Score: {}/{}\n", report.score, report.full_mark));
    out.push_str(&format!("Percentage: {}\n", format_percent(report.percentage)));
    out.push_str(&format!("Grade: {}\n\n", report.grade));
    out.push_str(&format!(
        "{} ({} {}):\n",
        year_heading(&report.year, report.aggregate),
        report.subject,
        report.paper
    ));
    push_cutoff_lines(&mut out, &report.cutoff_table_used);
    out
}

pub fn render_table_text(report: &TableReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} {}):\n",
        year_heading(&report.year, report.aggregate),
        report.subject,
        report.paper
    ));
    if report.cutoffs.is_empty() {
        out.push_str("(no reachable grades)\n");
    }
    push_cutoff_lines(&mut out, &report.cutoffs);
    out
}

pub fn render_subjects_text(subjects: &[SubjectSummary]) -> String {
    let mut out = String::new();
    for s in subjects {
        out.push_str(&format!(
            "{:<8} {:<45} {}\n",
            s.code,
            s.name.unwrap_or("-"),
            s.years.join(", ")
        ));
    }
    out
}

fn push_cutoff_lines(out: &mut String, cutoffs: &[GradeCutoff]) {
    for c in cutoffs {
        out.push_str(&format!("{}: {}%\n", c.grade, c.cutoff));
    }
}
