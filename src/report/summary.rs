use serde::Serialize;
use crate::core::ConversionResult;
use crate::utils::reduction_percent;

/// Totals over a finished run. Only successful conversions count toward the
/// byte totals; `failed` is carried separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub total_original_bytes: u64,
    pub total_new_bytes: u64,
    pub reduction_percent: f64,
}

impl RunSummary {
    pub fn from_results(results: &[ConversionResult], failed: usize) -> Self {
        let total_original_bytes: u64 = results.iter().map(|r| r.original_size).sum();
        let total_new_bytes: u64 = results.iter().map(|r| r.new_size).sum();

        Self {
            processed: results.len(),
            failed,
            total_original_bytes,
            total_new_bytes,
            reduction_percent: reduction_percent(total_original_bytes, total_new_bytes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processed == 0
    }
}

/// Serialized by `--report`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub summary: &'a RunSummary,
    pub results: &'a [ConversionResult],
}
