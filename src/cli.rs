use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use plategen::{MaxResults, Pattern, PlateGenerator, symbol_sum_score};

/// Verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// What to do with the generated plates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Print every plate, one per line
    Generate,
    /// Visit every plate, printing it in square brackets
    Process,
    /// Print the plates with the lowest symbol-sum score
    Best,
}

/// Plategen - Enumerate license plates cheapest first
#[derive(Parser, Debug)]
#[command(name = "plategen")]
#[command(about = "Enumerate license plates from per-position patterns in ascending cost order")]
#[command(version)]
pub struct CliArgs {
    /// Action to perform on the generated plates
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Maximum number of plates to consider (default: all)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_results: Option<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// One pattern per plate position, e.g. "A-Z" or "0-9,?"
    pub patterns: Vec<String>,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub action: Action,
    pub max_results: MaxResults,
    pub patterns: Vec<String>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    Ok(config_from_args(args))
}

fn config_from_args(args: CliArgs) -> CliConfig {
    CliConfig {
        action: args.action,
        max_results: MaxResults::from(args.max_results),
        patterns: args.patterns,
        log_level: args.log_level,
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

/// Compile the patterns, dropping any that yield no symbols so that a single
/// bad position does not empty the whole product.
fn compile_patterns(specs: &[String]) -> Vec<Pattern> {
    specs
        .iter()
        .filter_map(|spec| {
            let pattern = Pattern::parse(spec);
            if pattern.is_empty() {
                warn!("Dropping pattern '{}' with no valid symbols", spec);
                None
            } else {
                Some(pattern)
            }
        })
        .collect()
}

/// Perform the configured action, writing plates to `out`
pub fn execute<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let mut generator = PlateGenerator::new(compile_patterns(&config.patterns));

    info!(
        "Running {:?} over {} plates (limit {:?})",
        config.action,
        generator.count(),
        config.max_results
    );

    match config.action {
        Action::Generate => {
            for plate in generator.generate(config.max_results) {
                writeln!(out, "{}", plate).context("Failed to write plate")?;
            }
        }
        Action::Process => {
            generator
                .try_visit(config.max_results, |plate| writeln!(out, "[{}]", plate))
                .context("Failed to write plate")?;
        }
        Action::Best => {
            let best = generator.find_best_by_score(config.max_results, symbol_sum_score);
            if best.is_empty() {
                warn!("No plates to score");
            }
            for plate in best {
                writeln!(out, "{}", plate).context("Failed to write plate")?;
            }
        }
    }

    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(config.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config, &mut out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
