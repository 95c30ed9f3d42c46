//! Entry points driven by the binary.
//!
//! - [`convert_directory`]: convert every matching image under a root

mod convert;

pub use convert::{convert_directory, RunOutcome};
