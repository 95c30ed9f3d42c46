pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;
pub mod discovery;

pub use error::{OptimizerError, OptimizerResult};
pub use validation::{validate_run_config, validate_settings};
pub use formats::{ImageFormat, format_from_path, normalize_extension, output_path_for};
pub use fs::{
    get_file_size,
    ensure_readable_dir,
    reduction_percent,
    bytes_to_mb,
};
pub use discovery::discover_images;
