mod reporter;
mod summary;

pub use reporter::Reporter;
pub use summary::{RunReport, RunSummary};
