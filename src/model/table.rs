use serde::Serialize;

use crate::model::dataset::GradeCutoffs;
use crate::model::ordered::OrderedMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeCutoff {
    pub grade: String,
    pub cutoff: f64,
}

/// Cutoffs of one paper with unreachable grades removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CutoffTable {
    pub paper_key: String,
    cutoffs: OrderedMap<f64>,
}

impl CutoffTable {
    pub fn from_grades(paper_key: &str, grades: &GradeCutoffs) -> Self {
        let cutoffs = grades
            .iter()
            .filter_map(|(grade, value)| value.map(|v| (grade, v)))
            .collect();
        Self {
            paper_key: paper_key.to_string(),
            cutoffs,
        }
    }

    pub fn get(&self, grade: &str) -> Option<f64> {
        self.cutoffs.get(grade).copied()
    }

    pub fn len(&self) -> usize {
        self.cutoffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.cutoffs.iter().map(|(grade, v)| (grade, *v))
    }

    /// Highest cutoff first; equal cutoffs keep table order.
    pub fn sorted_desc(&self) -> Vec<GradeCutoff> {
        let mut sorted: Vec<GradeCutoff> = self
            .iter()
            .map(|(grade, cutoff)| GradeCutoff {
                grade: grade.to_string(),
                cutoff,
            })
            .collect();
        sorted.sort_by(|a, b| {
            b.cutoff
                .partial_cmp(&a.cutoff)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }
}
