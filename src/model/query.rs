use std::fmt;
use std::str::FromStr;

use crate::model::error::GradeError;

/// Spelling of the aggregate selector on the command line and in reports.
pub const AGGREGATE_HIGHEST: &str = "highest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearSelector {
    Year(String),
    /// Per grade, the highest cutoff recorded in any year.
    AggregateHighest,
}

impl YearSelector {
    pub fn is_aggregate(&self) -> bool {
        matches!(self, YearSelector::AggregateHighest)
    }
}

impl FromStr for YearSelector {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(GradeError::InvalidInput("year must not be empty".to_string())),
            AGGREGATE_HIGHEST | "aggregate-highest" => Ok(YearSelector::AggregateHighest),
            year => Ok(YearSelector::Year(year.to_string())),
        }
    }
}

impl fmt::Display for YearSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelector::Year(year) => f.write_str(year),
            YearSelector::AggregateHighest => f.write_str(AGGREGATE_HIGHEST),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub subject: String,
    pub paper: Option<String>,
    pub year: YearSelector,
}

impl Query {
    pub fn new(subject: impl Into<String>, year: YearSelector) -> Self {
        Self {
            subject: subject.into(),
            paper: None,
            year,
        }
    }

    pub fn with_paper(mut self, paper: impl Into<String>) -> Self {
        self.paper = Some(paper.into());
        self
    }

    /// Requested paper key; an empty key counts as no request.
    pub fn requested_paper(&self) -> Option<&str> {
        self.paper.as_deref().filter(|p| !p.is_empty())
    }
}
