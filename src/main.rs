mod cli;
mod config;
mod content;
mod engine;
mod error;
mod gender;
mod progress;
mod report;
mod types;

use crate::engine::accumulate::ReferencePolicy;
use crate::error::PersonaError;
use crate::types::answers::AnswerSet;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&config::PersonaConfig>,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|cfg| cfg.default_format()) {
            Some("json") => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32, PersonaError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            if !cmd.content_dir.exists() {
                return Err(PersonaError::PathNotFound(
                    cmd.content_dir.display().to_string(),
                ));
            }
            let loaded = config::load_config(&cmd.content_dir)?;
            let content = content::load_content(&cmd.content_dir)?;

            let raw = std::fs::read_to_string(&cmd.answers)?;
            let answers: AnswerSet = serde_json::from_str(&raw)
                .map_err(|e| PersonaError::AnswersParse(format!("{}: {}", cmd.answers.display(), e)))?;

            let test_id = cmd.test.as_deref().unwrap_or(answers.test_id.as_str());
            let test = content.bank.find_test(test_id)?;

            let lenient = cmd.lenient || loaded.as_ref().map(|cfg| cfg.lenient()).unwrap_or(false);
            let policy = if lenient {
                ReferencePolicy::Lenient
            } else {
                ReferencePolicy::Strict
            };

            let summary = engine::score_attempt(test, &answers, &content.catalog, policy)?;
            let format = resolve_format(cmd.format, loaded.as_ref());
            println!("{}", report::render_summary(&summary, format)?);

            if cmd.record {
                let fingerprint = content::fingerprint::content_fingerprint(&cmd.content_dir)?;
                let store = progress::ProgressStore::open(&cmd.content_dir);
                let entry = store.record_attempt(test, &answers, Some(fingerprint))?;
                tracing::info!(test = %entry.test_id, percent = entry.percent_complete, "progress recorded");
            }

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            if !cmd.content_dir.exists() {
                return Err(PersonaError::PathNotFound(
                    cmd.content_dir.display().to_string(),
                ));
            }
            let loaded = config::load_config(&cmd.content_dir)?;
            let content = content::load_content(&cmd.content_dir)?;
            let findings = content::validate::validate_content(&content.bank, &content.catalog);
            let fingerprint = content::fingerprint::content_fingerprint(&cmd.content_dir)?;

            let validation = report::ValidationReport {
                fingerprint,
                findings,
            };
            let format = resolve_format(cmd.format, loaded.as_ref());
            println!("{}", report::render_validation(&validation, format)?);

            if validation.has_blocking() {
                Ok(exit_code::BLOCKING)
            } else if validation.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::List(cmd) => {
            if !cmd.content_dir.exists() {
                return Err(PersonaError::PathNotFound(
                    cmd.content_dir.display().to_string(),
                ));
            }
            let content = content::load_content(&cmd.content_dir)?;
            for test in content.bank.tests() {
                println!(
                    "{} | {} | {} questions | categories: {}",
                    test.id,
                    test.name,
                    test.questions.len(),
                    test.scoring_categories.join(", ")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Progress(cmd) => {
            if !cmd.content_dir.exists() {
                return Err(PersonaError::PathNotFound(
                    cmd.content_dir.display().to_string(),
                ));
            }
            let store = progress::ProgressStore::open(&cmd.content_dir);
            match store.get(&cmd.test)? {
                Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
                None => println!("no progress recorded for {}", cmd.test),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
