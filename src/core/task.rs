//! Conversion task definition and creation.

use std::path::PathBuf;
use serde::Serialize;
use crate::core::ConversionResult;
use crate::utils::{OptimizerResult, output_path_for};

/// A single file's unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Where the WebP will be written
    pub output_path: PathBuf,
}

impl ConversionTask {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = output_path_for(&input_path);
        Self { input_path, output_path }
    }
}

/// What a worker hands back for each task, success or not.
#[derive(Debug)]
pub struct TaskOutcome {
    pub task: ConversionTask,
    pub result: OptimizerResult<ConversionResult>,
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
