use serde::Deserialize;

use crate::model::ordered::OrderedMap;

/// Grade label -> cutoff percentage; `None` marks a grade nobody could reach.
pub type GradeCutoffs = OrderedMap<Option<f64>>;

/// Paper key -> grade cutoffs for one exam year.
pub type PaperCutoffs = OrderedMap<GradeCutoffs>;

/// Year -> papers for one subject.
pub type SubjectCutoffs = OrderedMap<PaperCutoffs>;

/// Paper key used for the whole-subject score.
pub const TOTAL_PAPER: &str = "total";

/// Subject code -> year -> paper -> grade -> cutoff, in document order.
///
/// Loaded once and never mutated afterwards; every resolver call borrows it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CutoffDataset {
    subjects: OrderedMap<SubjectCutoffs>,
}

impl CutoffDataset {
    pub fn from_subjects(subjects: OrderedMap<SubjectCutoffs>) -> Self {
        Self { subjects }
    }

    pub fn subject(&self, code: &str) -> Option<&SubjectCutoffs> {
        self.subjects.get(code)
    }

    pub fn subjects(&self) -> impl Iterator<Item = (&str, &SubjectCutoffs)> {
        self.subjects.iter()
    }

    pub fn n_subjects(&self) -> usize {
        self.subjects.len()
    }

    pub fn n_years(&self) -> usize {
        self.subjects.iter().map(|(_, years)| years.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
