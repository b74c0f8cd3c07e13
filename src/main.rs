// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pdf_keyword_index::error::EXIT_GENERAL_ERROR;
use pdf_keyword_index::utils::logging::{
    format_error, format_info, format_success, format_warning, init_logger,
};
use pdf_keyword_index::{Config, IndexerError, ReportFormat, RunOptions, RunSummary, Validator};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "pdf_keyword_index")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Map keywords to the PDF pages they appear on", long_about = None)]
struct Cli {
    /// PDF document to index
    #[arg(value_name = "DOCUMENT")]
    document: Option<PathBuf>,

    /// Comma-separated keywords; repeat the flag to add more
    #[arg(short, long, value_name = "LIST", action = ArgAction::Append)]
    keywords: Vec<String>,

    /// File with one keyword per line
    #[arg(long, value_name = "FILE")]
    keywords_file: Option<PathBuf>,

    /// Pages to skip, e.g. "1,5,37-99"
    #[arg(short, long, value_name = "PAGES", action = ArgAction::Append)]
    skip: Vec<String>,

    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "PDF_KEYWORD_INDEX_CONFIG",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Draw a progress bar while scanning
    #[arg(long, action = ArgAction::SetTrue)]
    progress_bar: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    match execute(cli) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", format_error(&format!("Error: {:#}", err)));
            let code = err
                .downcast_ref::<IndexerError>()
                .map(IndexerError::exit_code)
                .unwrap_or(EXIT_GENERAL_ERROR);
            ExitCode::from(code)
        }
    }
}

fn execute(cli: Cli) -> Result<RunSummary> {
    let start_time = Instant::now();

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    apply_overrides(&mut config, &cli)?;

    let mut options = RunOptions::from_config(&config)?;
    options.progress_bar = cli.progress_bar;
    options.colored = cli.color;

    let summary = pdf_keyword_index::pipeline::run(&options)?;

    info!(
        "Indexing complete in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Command line values take precedence over the configuration file.
fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(document) = &cli.document {
        config.document.path = Some(document.clone());
    }

    if !cli.keywords.is_empty() || cli.keywords_file.is_some() {
        config.index.keywords = cli
            .keywords
            .iter()
            .flat_map(|list| Validator::parse_keyword_list(list))
            .collect();
        config.index.keywords_file = cli.keywords_file.clone();
    }

    if !cli.skip.is_empty() {
        config.index.skip_pages = cli.skip.join(",");
    }

    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    config.validate().context("Invalid options")?;
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    info!(
        "{}",
        format_success(&format!("Keyword index saved to {}", summary.output.display()))
    );
    info!(
        "{}",
        format_info(&format!(
            "Found matches for {} out of {} keywords",
            summary.found, summary.total_keywords
        ))
    );
    info!(
        "{}",
        format_info(&format!("Not found: {} keywords", summary.not_found))
    );
    info!("{}", format_info(&summary.stats.to_string()));

    if summary.page_warnings > 0 || summary.page_errors > 0 {
        warn!(
            "{}",
            format_warning(&format!(
                "{} pages had no extractable text, {} pages failed",
                summary.page_warnings, summary.page_errors
            ))
        );
    }
}
