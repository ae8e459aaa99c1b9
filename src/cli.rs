use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{Config, PartialConfig};
use crate::pipeline::run_merge;
use crate::report::{MergeReport, ReportFormat};
use crate::utils::ProgressTracker;

/// Command line interface for the csvmerge binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV files to merge, in order
    #[arg(short, long = "input", value_name = "FILE", num_args = 1.., conflicts_with = "dir")]
    pub input: Vec<Utf8PathBuf>,

    /// Directory whose *.csv files are merged
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<Utf8PathBuf>,

    /// Output CSV file (parent directories are created)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Column used to detect duplicates [default: Email]
    #[arg(short, long, value_name = "FIELD")]
    pub key: Option<String>,

    /// Compare key values case-insensitively; `=false` overrides a config file
    #[arg(
        short,
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub case_insensitive: Option<bool>,

    /// YAML file with default settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Summary report format
    #[arg(short = 'f', long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// The settings given on the command line, with unset flags left empty.
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            input_files: (!self.input.is_empty()).then(|| self.input.clone()),
            input_dir: self.dir.clone(),
            output: self.output.clone(),
            key_field: self.key.clone(),
            case_insensitive: self.case_insensitive,
        }
    }
}

/// Merge the configured inputs and print the run summary to stdout.
pub fn run(args: Cli) -> Result<()> {
    let config = build_config(&args)?;
    let progress = ProgressTracker::new();

    let outcome = run_merge(&config, &progress)
        .with_context(|| format!("failed to merge CSV files into {}", config.output))?;

    let report = MergeReport::new(&config, outcome);
    for failed in report.failed_files() {
        warn!("{} was not merged", failed.path());
    }

    let content = report.render(args.format).context("failed to render report")?;
    println!("{content}");
    Ok(())
}

pub fn build_config(args: &Cli) -> Result<Config> {
    let base = match &args.config {
        Some(path) => PartialConfig::load(path)?,
        None => PartialConfig::default(),
    };

    let config = Config::try_from(base.overlay(args.overrides()))
        .context("invalid merge configuration")?;
    Ok(config)
}

/// Install the stderr log subscriber. Fails if one is already installed.
pub fn initialise_tracing(verbose: bool) -> Result<()> {
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
