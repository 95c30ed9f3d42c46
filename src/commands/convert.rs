//! Directory conversion command: discover, convert in parallel, summarize.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::core::{ConversionResult, ConversionTask, RunConfig};
use crate::processing::ImageConverter;
use crate::report::{Reporter, RunReport, RunSummary};
use crate::utils::{OptimizerError, OptimizerResult, discover_images, validate_run_config};
use crate::worker::WorkerPool;

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Number of files that matched the extension filter
    pub discovered: usize,
    pub results: Vec<ConversionResult>,
    pub summary: RunSummary,
}

impl RunOutcome {
    /// Process exit status: 0 unless images were found and every one failed.
    pub fn exit_code(&self) -> i32 {
        if self.discovered > 0 && self.summary.processed == 0 {
            2
        } else {
            0
        }
    }
}

/// Converts every matching image under `config.root`, writing the progress
/// report through `reporter` as conversions complete.
///
/// Missing roots and invalid settings fail before any file is touched.
/// Per-file failures are reported and excluded from the summary.
pub async fn convert_directory<W: Write>(
    config: &RunConfig,
    reporter: &mut Reporter<W>,
) -> OptimizerResult<RunOutcome> {
    validate_run_config(config)?;

    let files = discover_images(&config.root, &config.settings.extensions)?;
    let discovered = files.len();
    reporter.found(discovered)?;

    let tasks: Vec<ConversionTask> = files.into_iter().map(ConversionTask::new).collect();
    warn_on_output_collisions(&tasks);

    let converter = ImageConverter::new(config.settings.clone());
    let pool = WorkerPool::new(move |task: &ConversionTask| converter.convert(task), config.workers);
    let start = Instant::now();

    let results = pool.run(tasks, |outcome| {
        if let Err(e) = reporter.outcome(outcome) {
            warn!("Failed to write progress for {}: {}", outcome.task.input_path.display(), e);
        }
    }).await;

    let failed = discovered - results.len();
    let summary = RunSummary::from_results(&results, failed);
    reporter.summary(&summary)?;
    reporter.flush()?;

    info!(
        "Run finished in {:.2}s: {} converted, {} failed",
        start.elapsed().as_secs_f64(), summary.processed, summary.failed
    );

    if let Some(path) = &config.report_path {
        write_json_report(path, &summary, &results)?;
    }

    Ok(RunOutcome { discovered, results, summary })
}

/// `photo.jpg` and `photo.png` in one folder both map to `photo.webp`;
/// whichever finishes last wins.
fn warn_on_output_collisions(tasks: &[ConversionTask]) {
    let mut by_output: HashMap<&PathBuf, Vec<&PathBuf>> = HashMap::new();
    for task in tasks {
        by_output.entry(&task.output_path).or_default().push(&task.input_path);
    }

    for (output, inputs) in by_output.into_iter().filter(|(_, inputs)| inputs.len() > 1) {
        let names: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        warn!("{} sources share output {}: {}", inputs.len(), output.display(), names.join(", "));
    }
}

fn write_json_report(
    path: &Path,
    summary: &RunSummary,
    results: &[ConversionResult],
) -> OptimizerResult<()> {
    let json = serde_json::to_string_pretty(&RunReport { summary, results })
        .map_err(|e| OptimizerError::IO(format!("Failed to serialize report: {}", e)))?;

    std::fs::write(path, json)
        .map_err(|e| OptimizerError::IO(format!("Failed to write report {}: {}", path.display(), e)))?;

    debug!("JSON report written to {}", path.display());
    Ok(())
}
