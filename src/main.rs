mod catalog;
mod input;
mod links;
mod logging;
mod model;
mod report;
mod resolve;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::{InputError, load_dataset};
use crate::links::LinkError;
use crate::model::{GradeError, Query, YearSelector};
use crate::report::json::{render_grade_json, render_subjects_json, render_table_json};
use crate::report::text::{render_grade_text, render_subjects_text, render_table_text};
use crate::report::{TableReport, summarize_subjects};
use crate::resolve::{grade_score, resolve_cutoff_table};

#[derive(Debug, Parser)]
#[command(
    name = "dse-gradecalc",
    version,
    about = "Resolve HKDSE grade cutoffs and map raw scores to letter grades"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Grade a raw score against a subject's cutoffs
    Grade(GradeArgs),
    /// Print the cutoff table a query resolves to
    Table(TableArgs),
    /// List subjects and years present in a dataset
    Subjects(SubjectsArgs),
    /// Build the path of a past paper
    PaperUrl(PaperUrlArgs),
    /// Build the path of a marking scheme
    AnswerUrl(AnswerUrlArgs),
    /// Build a video search URL for a past paper
    VideoUrl(VideoUrlArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
struct SelectionArgs {
    /// Cutoff dataset (JSON, optionally .gz)
    #[arg(long)]
    data: PathBuf,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    paper: Option<String>,
    /// Exam year, or "highest" for the highest cutoff across all years
    #[arg(long, default_value = "highest")]
    year: YearSelector,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl SelectionArgs {
    fn query(&self) -> Query {
        Query {
            subject: self.subject.clone(),
            paper: self.paper.clone(),
            year: self.year.clone(),
        }
    }
}

#[derive(Debug, Args)]
struct GradeArgs {
    #[command(flatten)]
    selection: SelectionArgs,
    #[arg(long, allow_negative_numbers = true)]
    score: f64,
    /// Defaults to the catalog full mark of the resolved paper
    #[arg(long)]
    full_mark: Option<f64>,
}

#[derive(Debug, Args)]
struct TableArgs {
    #[command(flatten)]
    selection: SelectionArgs,
}

#[derive(Debug, Args)]
struct SubjectsArgs {
    #[arg(long)]
    data: PathBuf,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct PaperUrlArgs {
    #[arg(long)]
    subject: String,
    #[arg(long)]
    year: u32,
    #[arg(long)]
    paper: Option<String>,
    #[arg(long, default_value = "")]
    base: String,
}

#[derive(Debug, Args)]
struct AnswerUrlArgs {
    #[arg(long)]
    subject: String,
    #[arg(long)]
    year: u32,
    #[arg(long, default_value = "")]
    base: String,
}

#[derive(Debug, Args)]
struct VideoUrlArgs {
    #[arg(long)]
    subject: String,
    #[arg(long)]
    year: u32,
    #[arg(long)]
    topic: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    match run(&cli.cmd) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cmd: &Command) -> Result<String, CliError> {
    match cmd {
        Command::Grade(args) => {
            let dataset = load_dataset(&args.selection.data)?;
            let report = grade_score(
                &dataset,
                &args.selection.query(),
                args.score,
                args.full_mark,
            )?;
            Ok(match args.selection.format {
                OutputFormat::Text => render_grade_text(&report),
                OutputFormat::Json => render_grade_json(&report)?,
            })
        }
        Command::Table(args) => {
            let dataset = load_dataset(&args.selection.data)?;
            let query = args.selection.query();
            let table = resolve_cutoff_table(&dataset, &query)?;
            let report = TableReport::new(&query, &table);
            Ok(match args.selection.format {
                OutputFormat::Text => render_table_text(&report),
                OutputFormat::Json => render_table_json(&report)?,
            })
        }
        Command::Subjects(args) => {
            let dataset = load_dataset(&args.data)?;
            let subjects = summarize_subjects(&dataset);
            Ok(match args.format {
                OutputFormat::Text => render_subjects_text(&subjects),
                OutputFormat::Json => render_subjects_json(&subjects)?,
            })
        }
        Command::PaperUrl(args) => {
            let path =
                links::paper_path(&args.base, &args.subject, args.year, args.paper.as_deref())?;
            Ok(format!("{path}\n"))
        }
        Command::AnswerUrl(args) => {
            let path = links::answer_path(&args.base, &args.subject, args.year)?;
            Ok(format!("{path}\n"))
        }
        Command::VideoUrl(args) => {
            let url = links::video_search_url(&args.subject, args.year, args.topic.as_deref())?;
            Ok(format!("{url}\n"))
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
