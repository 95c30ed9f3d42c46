use crate::core::{ConversionSettings, RunConfig};
use crate::utils::{OptimizerError, OptimizerResult, ImageFormat, normalize_extension};

/// Validates a whole run before any work starts
pub fn validate_run_config(config: &RunConfig) -> OptimizerResult<()> {
    if config.workers == 0 {
        return Err(OptimizerError::validation("Worker count cannot be 0"));
    }
    validate_settings(&config.settings)
}

/// Validates conversion settings
pub fn validate_settings(settings: &ConversionSettings) -> OptimizerResult<()> {
    if settings.quality > 100 {
        return Err(OptimizerError::validation(
            format!("Invalid quality value: {}. Must be between 0 and 100", settings.quality)
        ));
    }

    if settings.max_width == 0 {
        return Err(OptimizerError::validation("Max width cannot be 0"));
    }

    if settings.extensions.iter().all(|e| normalize_extension(e).is_empty()) {
        return Err(OptimizerError::validation("At least one input extension is required"));
    }

    // Picking up our own outputs would overwrite each source's sibling with itself
    if settings.extensions.iter().any(|e| ImageFormat::TARGET.matches_extension(e)) {
        return Err(OptimizerError::validation(format!(
            "Input extensions cannot include the output format ({})",
            ImageFormat::TARGET.primary_extension()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_settings(&ConversionSettings::default()).is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let mut s = ConversionSettings::default();
        s.quality = 101;
        assert!(validate_settings(&s).is_err());

        let mut s = ConversionSettings::default();
        s.max_width = 0;
        assert!(validate_settings(&s).is_err());

        let mut s = ConversionSettings::default();
        s.extensions = vec![".".into(), " ".into()];
        assert!(validate_settings(&s).is_err());

        let mut s = ConversionSettings::default();
        s.extensions.push(".WEBP".into());
        assert!(validate_settings(&s).is_err());
    }

    #[test]
    fn quality_bounds_are_inclusive() {
        let mut s = ConversionSettings::default();
        s.quality = 0;
        assert!(validate_settings(&s).is_ok());
        s.quality = 100;
        assert!(validate_settings(&s).is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = RunConfig {
            root: PathBuf::from("projects"),
            workers: 0,
            settings: ConversionSettings::default(),
            report_path: None,
        };
        assert!(validate_run_config(&config).is_err());
    }
}
