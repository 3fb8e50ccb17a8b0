use serde::Serialize;

use crate::model::{CutoffTable, GradeCutoff, GradeError};

/// Grade reported when the percentage is below every cutoff.
pub const BELOW_MINIMUM_GRADE: &str = "U**";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeOutcome {
    pub grade: String,
    pub sorted_cutoffs: Vec<GradeCutoff>,
}

pub fn percentage(score: f64, full_mark: f64) -> Result<f64, GradeError> {
    if !score.is_finite() {
        return Err(GradeError::InvalidInput(format!(
            "score must be a finite number, got {score}"
        )));
    }
    if !full_mark.is_finite() || full_mark <= 0.0 {
        return Err(GradeError::InvalidInput(format!(
            "full mark must be a positive number, got {full_mark}"
        )));
    }
    Ok(score / full_mark * 100.0)
}

pub fn compute_grade(table: &CutoffTable, percentage: f64) -> GradeOutcome {
    let sorted_cutoffs = table.sorted_desc();
    let grade = sorted_cutoffs
        .iter()
        .find(|c| c.cutoff <= percentage)
        .map(|c| c.grade.clone())
        .unwrap_or_else(|| BELOW_MINIMUM_GRADE.to_string());
    GradeOutcome {
        grade,
        sorted_cutoffs,
    }
}
