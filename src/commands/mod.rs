//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: Detect line endings and indentation of files
//! - **convert**: Rewrite a file into another style
//! - **init**: Initialize a new configuration file

pub mod analyze;
pub mod convert;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use convert::{handle_convert, ConvertConfig, TargetSpec};
pub use init::init_config;
