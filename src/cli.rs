use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "persona",
    version,
    about = "Personality-test scoring and profile resolution CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a completed attempt and print the resolved profile
    Score(ScoreCommand),
    /// Check the content pack for integrity problems
    Validate(ValidateCommand),
    /// List the tests in a content pack
    List(ListCommand),
    /// Show stored progress for a test
    Progress(ProgressCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Content pack directory (tests/ + profiles.json)
    pub content_dir: PathBuf,

    /// Answer-set document for one completed attempt
    #[arg(short, long)]
    pub answers: PathBuf,

    /// Test id; overrides the testId in the answers file
    #[arg(short, long)]
    pub test: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Skip and log bad answer references instead of failing fast
    #[arg(long)]
    pub lenient: bool,

    /// Record a progress entry for this attempt
    #[arg(long)]
    pub record: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub content_dir: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ListCommand {
    pub content_dir: PathBuf,
}

#[derive(Args)]
pub struct ProgressCommand {
    pub content_dir: PathBuf,

    /// Test id to show progress for
    #[arg(short, long)]
    pub test: String,
}
