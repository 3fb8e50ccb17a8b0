pub mod dataset;
pub mod error;
pub mod ordered;
pub mod query;
pub mod table;

pub use dataset::{CutoffDataset, GradeCutoffs, PaperCutoffs, SubjectCutoffs, TOTAL_PAPER};
pub use error::GradeError;
pub use ordered::OrderedMap;
pub use query::{Query, YearSelector};
pub use table::{CutoffTable, GradeCutoff};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
