//! Past-paper, answer and video search links.

use thiserror::Error;
use url::Url;

use crate::catalog;

const VIDEO_SEARCH_BASE: &str = "https://www.youtube.com/results";
const EXAM_NAME: &str = "HKDSE";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("subject {subject} needs a paper (one of {options})")]
    MissingPaper { subject: String, options: String },
    #[error("subject {subject} has no paper {paper}")]
    UnknownPaper { subject: String, paper: String },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub fn paper_path(
    base: &str,
    subject: &str,
    year: u32,
    paper: Option<&str>,
) -> Result<String, LinkError> {
    let info =
        catalog::subject(subject).ok_or_else(|| LinkError::UnknownSubject(subject.to_string()))?;
    let base = base.trim_end_matches('/');
    if catalog::is_extended_module(subject) {
        return Ok(format!("{base}/{subject}/{year}/pp.pdf"));
    }
    let paper = paper
        .filter(|p| !p.is_empty())
        .ok_or_else(|| LinkError::MissingPaper {
            subject: subject.to_string(),
            options: info.papers.join(", "),
        })?;
    if !info.papers.contains(&paper) {
        return Err(LinkError::UnknownPaper {
            subject: subject.to_string(),
            paper: paper.to_string(),
        });
    }
    Ok(format!("{base}/{subject}/{year}/{paper}.pdf"))
}

pub fn answer_path(base: &str, subject: &str, year: u32) -> Result<String, LinkError> {
    if catalog::subject(subject).is_none() {
        return Err(LinkError::UnknownSubject(subject.to_string()));
    }
    let base = base.trim_end_matches('/');
    Ok(format!("{base}/{subject}/{year}/answer.pdf"))
}

pub fn video_search_url(
    subject: &str,
    year: u32,
    topic: Option<&str>,
) -> Result<Url, LinkError> {
    let info =
        catalog::subject(subject).ok_or_else(|| LinkError::UnknownSubject(subject.to_string()))?;
    let mut query = format!("{EXAM_NAME} {year} {}", info.name);
    if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
        query.push(' ');
        query.push_str(topic);
    }
    let mut url = Url::parse(VIDEO_SEARCH_BASE)?;
    url.query_pairs_mut().append_pair("search_query", &query);
    Ok(url)
}
