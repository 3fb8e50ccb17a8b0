use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::CutoffDataset;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn load_dataset(path: &Path) -> Result<CutoffDataset, InputError> {
    let reader = open_maybe_gz(path)?;
    let dataset: CutoffDataset = serde_json::from_reader(reader)?;
    check_dataset(&dataset)?;
    info!(
        "loaded cutoff dataset {}: {} subjects, {} subject-years",
        path.display(),
        dataset.n_subjects(),
        dataset.n_years()
    );
    Ok(dataset)
}

pub fn parse_dataset(json: &str) -> Result<CutoffDataset, InputError> {
    let dataset: CutoffDataset = serde_json::from_str(json)?;
    check_dataset(&dataset)?;
    Ok(dataset)
}

fn check_dataset(dataset: &CutoffDataset) -> Result<(), InputError> {
    if dataset.is_empty() {
        return Err(InputError::InvalidDataset(
            "dataset has no subjects".to_string(),
        ));
    }
    for (code, years) in dataset.subjects() {
        if years.is_empty() {
            warn!("subject {code} has no years of cutoff data");
        }
        for (year, papers) in years.iter() {
            if papers.is_empty() {
                warn!("subject {code} lists {year} without any paper cutoffs");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
