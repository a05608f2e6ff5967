// Export modules for library usage
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{Defaults, EolStyle, Error, IndentStyle, Result, Verdict};

pub use crate::engine::{
    analyze, analyze_report, convert, convert_in_place, AnalysisOptions, AnalysisReport,
    ConvertOptions,
};

pub use crate::batch::{analyze_file, analyze_files, FileVerdict};
pub use crate::io::FileWalker;
