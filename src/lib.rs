// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod worker;
pub mod report;
pub mod commands;

// Public exports for external consumers
pub use crate::core::{ConversionResult, ConversionSettings, ConversionTask, RunConfig};
pub use crate::utils::{OptimizerError, OptimizerResult};
pub use crate::report::{Reporter, RunSummary};
pub use crate::commands::*;
