// Entry point for the batch WebP optimizer CLI.
// All conversion logic lives in the library; this file only parses arguments,
// sets up logging and maps the run outcome to an exit code.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use webp_batch_optimizer::core::{
    ConversionSettings, RunConfig, default_worker_count,
    DEFAULT_EXTENSIONS, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_ROOT,
};
use webp_batch_optimizer::{Reporter, convert_directory};

#[derive(Parser)]
#[command(name = "webp-batch-optimizer")]
#[command(about = "Convert JPEG/PNG images under a directory to resized WebP", long_about = None)]
struct Cli {
    /// Directory to scan recursively
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Images wider than this are downscaled to it
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// WebP quality (0-100)
    #[arg(long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Input extensions, case-insensitive; repeat or comma-separate
    #[arg(long = "ext", value_delimiter = ',', default_values = DEFAULT_EXTENSIONS)]
    extensions: Vec<String>,

    /// Concurrent conversions (defaults to available parallelism)
    #[arg(long)]
    workers: Option<usize>,

    /// Also write results and summary as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            root: self.root,
            workers: self.workers.unwrap_or_else(default_worker_count),
            settings: ConversionSettings {
                max_width: self.max_width,
                quality: self.quality,
                extensions: self.extensions,
            },
            report_path: self.report,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)       // Remove module path
        .with_thread_ids(false)
        .with_writer(std::io::stderr) // stdout carries the report
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = cli.into_config();
    info!(
        "Converting images under {} (max width {}, quality {}, {} workers)",
        config.root.display(), config.settings.max_width, config.settings.quality, config.workers
    );

    let mut reporter = Reporter::new(std::io::stdout().lock());
    let outcome = convert_directory(&config, &mut reporter)
        .await
        .with_context(|| format!("conversion of {} aborted", config.root.display()))?;

    Ok(outcome.exit_code())
}

#[tokio::main]
async fn main() {
    init_tracing();

    let code = match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };

    std::process::exit(code);
}
