//! Static exam catalog: subject codes, their papers and default full marks.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectInfo {
    pub code: &'static str,
    pub name: &'static str,
    /// Empty for subjects examined as a single paper.
    pub papers: &'static [&'static str],
}

const DEFAULT_PAPERS: &[&str] = &["p1", "p2"];

pub const SUBJECTS: &[SubjectInfo] = &[
    SubjectInfo {
        code: "chi",
        name: "Chinese Language",
        papers: &["p1", "p2"],
    },
    SubjectInfo {
        code: "eng",
        name: "English Language",
        papers: &["p1", "p2", "p3", "p4"],
    },
    SubjectInfo {
        code: "m0",
        name: "Mathematics",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "m1",
        name: "Mathematics Extended Module 1",
        papers: &[],
    },
    SubjectInfo {
        code: "m2",
        name: "Mathematics Extended Module 2",
        papers: &[],
    },
    SubjectInfo {
        code: "chihist",
        name: "Chinese History",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "bio",
        name: "Biology",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "chem",
        name: "Chemistry",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "phy",
        name: "Physics",
        papers: &["p1a", "p1b", "p2"],
    },
    SubjectInfo {
        code: "enghist",
        name: "History",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "geog",
        name: "Geography",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "econ",
        name: "Economics",
        papers: DEFAULT_PAPERS,
    },
    SubjectInfo {
        code: "bafs",
        name: "Business, Accounting and Financial Studies",
        papers: &["p1", "p2a", "p2b"],
    },
    SubjectInfo {
        code: "ict",
        name: "Information and Communication Technology",
        papers: &["p1", "p2a", "p2b", "p2c", "p2d"],
    },
];

const EXTENDED_FULL_MARK: f64 = 100.0;

pub fn subject(code: &str) -> Option<&'static SubjectInfo> {
    SUBJECTS.iter().find(|s| s.code == code)
}

pub fn is_extended_module(code: &str) -> bool {
    code == "m1" || code == "m2"
}

/// Full mark the calculator assumes when the user gives none.
pub fn default_full_mark(code: &str, paper: Option<&str>) -> Option<f64> {
    match (code, paper) {
        ("chi", Some("p1")) => Some(80.0),
        ("chi", Some("p2")) => Some(103.0),
        ("eng", Some("p1")) => Some(84.0),
        ("eng", Some("p2")) => Some(21.0),
        (code, _) if is_extended_module(code) => Some(EXTENDED_FULL_MARK),
        _ => None,
    }
}
