use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use numvar_generate::io::{read_dataset, write_dataset};
use numvar_generate::{GenerateOptions, GenerationError, VariationEngine};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "numvar", version, about = "Phone number variation generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a source dataset with synthetic number variations.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Source dataset CSV with Phone, Tip and Operator columns.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output dataset CSV.
    #[arg(long, value_name = "FILE", default_value = "generated_numbers.csv")]
    output: PathBuf,
    /// Blacklist CSV; a missing file means an empty blacklist.
    #[arg(long, value_name = "FILE", default_value = "blacklist.csv")]
    blacklist: PathBuf,
    /// Variations to generate per source number.
    #[arg(long, default_value_t = 5)]
    variations: usize,
    /// Digit positions to vary behind the operator prefix.
    #[arg(long, default_value_t = 3)]
    digits_to_vary: usize,
    /// RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional path for the JSON run report.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    // The engine rejects widths that exceed a specific base's mutable
    // digits; the boundary check here catches values that no registered
    // prefix could satisfy.
    if !(1..=7).contains(&args.digits_to_vary) {
        return Err(CliError::InvalidConfig(
            "digits-to-vary must be between 1 and 7".to_string(),
        ));
    }

    let records = read_dataset(&args.input)?;
    let engine = VariationEngine::new(GenerateOptions {
        variations_per_number: args.variations,
        digits_to_vary: args.digits_to_vary,
        blacklist_path: Some(args.blacklist),
        seed: args.seed,
    });

    let outcome = engine.run(records)?;
    write_dataset(&args.output, &outcome.records)?;

    if let Some(path) = &args.report {
        std::fs::write(path, serde_json::to_vec_pretty(&outcome.report)?)?;
    }

    info!(
        rows = outcome.records.len(),
        variations = outcome.report.variations_generated,
        output = %args.output.display(),
        "dataset written"
    );
    Ok(())
}
