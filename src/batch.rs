//! File-level and batch entry points around the engine.
//!
//! A file that cannot be read yields the fallback verdict instead of an
//! error: "no information" and "cannot read" are treated alike.

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug_span, warn};

use crate::core::{Defaults, Verdict};
use crate::engine::{analyze_report, AnalysisOptions, AnalysisReport};
use crate::io::read_text;

/// Verdict for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVerdict {
    pub path: PathBuf,
    pub verdict: Verdict,
    /// False when the file could not be read and `verdict` is the fallback.
    pub readable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
}

/// Reads, decodes and analyzes a single file.
pub fn analyze_file(
    path: &Path,
    codec: &str,
    options: AnalysisOptions,
    defaults: &Defaults,
) -> FileVerdict {
    let _span = debug_span!("analyze_file", path = %path.display()).entered();

    match read_text(path, codec) {
        Ok(content) => {
            let report = analyze_report(&content, options, defaults);
            FileVerdict {
                path: path.to_path_buf(),
                verdict: report.verdict,
                readable: true,
                report: Some(report),
            }
        }
        Err(e) => {
            if e.is_not_found() {
                warn!(path = %path.display(), "file not found, using defaults");
            } else {
                warn!(path = %path.display(), error = %e, "unreadable file, using defaults");
            }
            FileVerdict {
                path: path.to_path_buf(),
                verdict: defaults.verdict(),
                readable: false,
                report: None,
            }
        }
    }
}

/// Analyzes every path in parallel; results keep the input order.
pub fn analyze_files(
    paths: &[PathBuf],
    codec: &str,
    options: AnalysisOptions,
    defaults: &Defaults,
) -> Vec<FileVerdict> {
    analyze_files_with_progress(paths, codec, options, defaults, None)
}

pub fn analyze_files_with_progress(
    paths: &[PathBuf],
    codec: &str,
    options: AnalysisOptions,
    defaults: &Defaults,
    progress: Option<&ProgressBar>,
) -> Vec<FileVerdict> {
    paths
        .par_iter()
        .progress_with(progress.cloned().unwrap_or_else(ProgressBar::hidden))
        .map(|path| analyze_file(path, codec, options, defaults))
        .collect()
}

/// Sequential variant for `--no-parallel`.
pub fn analyze_files_sequential(
    paths: &[PathBuf],
    codec: &str,
    options: AnalysisOptions,
    defaults: &Defaults,
) -> Vec<FileVerdict> {
    paths
        .iter()
        .map(|path| analyze_file(path, codec, options, defaults))
        .collect()
}
