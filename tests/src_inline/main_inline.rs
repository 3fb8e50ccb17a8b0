use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_dataset(json: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!(
        "dse_gradecalc_cli_{}_{}.json",
        std::process::id(),
        id
    ));
    fs::write(&path, json).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("dse-gradecalc").chain(args.iter().copied())).unwrap()
}

const M0: &str = r#"{"m0":{
    "2022":{"total":{"A":75,"B":55,"C":null}},
    "2023":{"total":{"A":80,"B":60,"C":40}}
}}"#;

#[test]
fn test_grade_defaults_to_highest_year() {
    let cli = parse(&["grade", "--data", "d.json", "--subject", "m0", "--score", "50"]);
    let Command::Grade(args) = cli.cmd else {
        panic!("expected grade command");
    };
    assert_eq!(args.selection.year, YearSelector::AggregateHighest);
    assert_eq!(args.selection.format, OutputFormat::Text);
    assert_eq!(args.full_mark, None);
}

#[test]
fn test_grade_accepts_negative_score_and_year() {
    let cli = parse(&[
        "-vv", "grade", "--data", "d.json", "--subject", "m0", "--year", "2023", "--score", "-3",
        "--full-mark", "100", "--format", "json",
    ]);
    assert_eq!(cli.verbose, 2);
    let Command::Grade(args) = cli.cmd else {
        panic!("expected grade command");
    };
    assert_eq!(args.selection.year, YearSelector::Year("2023".to_string()));
    assert_eq!(args.score, -3.0);
    assert_eq!(args.selection.format, OutputFormat::Json);
}

#[test]
fn test_missing_score_is_rejected() {
    let res = Cli::try_parse_from(["dse-gradecalc", "grade", "--data", "d.json", "--subject", "m0"]);
    assert!(res.is_err());
}

#[test]
fn test_run_grade_text() {
    let data = write_dataset(M0);
    let cli = parse(&[
        "grade",
        "--data",
        data.to_str().unwrap(),
        "--subject",
        "m0",
        "--year",
        "2023",
        "--score",
        "65",
        "--full-mark",
        "100",
    ]);
    let out = run(&cli.cmd).unwrap();
    assert!(out.contains("Score: 65/100"));
    assert!(out.contains("Percentage: 65.00%"));
    assert!(out.contains("Grade: B"));
    assert!(out.contains("2023 cutoffs (m0 total):"));
    assert!(out.ends_with("A: 80%\nB: 60%\nC: 40%\n"));
}

#[test]
fn test_run_table_json_highest() {
    let data = write_dataset(M0);
    let cli = parse(&[
        "table",
        "--data",
        data.to_str().unwrap(),
        "--subject",
        "m0",
        "--format",
        "json",
    ]);
    let out = run(&cli.cmd).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["aggregate"], true);
    assert_eq!(value["paper"], "total");
    assert_eq!(value["cutoffs"][2]["grade"], "C");
    assert_eq!(value["cutoffs"][2]["cutoff"], 40.0);
}

#[test]
fn test_run_reports_missing_subject() {
    let data = write_dataset(M0);
    let cli = parse(&[
        "grade",
        "--data",
        data.to_str().unwrap(),
        "--subject",
        "m2",
        "--score",
        "10",
        "--full-mark",
        "100",
    ]);
    let err = run(&cli.cmd).unwrap_err();
    assert!(matches!(err, CliError::Grade(GradeError::NotFound(_))));
}

#[test]
fn test_run_subjects_lists_years() {
    let data = write_dataset(M0);
    let cli = parse(&["subjects", "--data", data.to_str().unwrap()]);
    let out = run(&cli.cmd).unwrap();
    assert!(out.starts_with("m0"));
    assert!(out.contains("Mathematics"));
    assert!(out.contains("2022, 2023"));
}

#[test]
fn test_run_link_commands() {
    let cli = parse(&["paper-url", "--subject", "m1", "--year", "2019"]);
    assert_eq!(run(&cli.cmd).unwrap(), "/m1/2019/pp.pdf\n");

    let cli = parse(&["answer-url", "--subject", "m0", "--year", "2019", "--base", "/dse"]);
    assert_eq!(run(&cli.cmd).unwrap(), "/dse/m0/2019/answer.pdf\n");

    let cli = parse(&["video-url", "--subject", "m0", "--year", "2019"]);
    let out = run(&cli.cmd).unwrap();
    assert!(out.starts_with("https://www.youtube.com/results?search_query=HKDSE+2019"));

    let cli = parse(&["paper-url", "--subject", "m0", "--year", "2019"]);
    assert!(matches!(
        run(&cli.cmd),
        Err(CliError::Link(LinkError::MissingPaper { .. }))
    ));
}
