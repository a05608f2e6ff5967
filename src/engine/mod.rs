//! Inference engine for line-ending and indentation style.
//!
//! Lines flow one at a time through [`splitter`] → [`classifier`] →
//! [`transition`] → [`aggregator`]; once the buffer is consumed,
//! [`decision`] turns the counters into a [`Verdict`]. [`convert`] is an
//! independent pass that rewrites a buffer between two verdicts.
//!
//! Every call owns its own [`AnalysisContext`], so buffers can be analyzed
//! in parallel without locking.

pub mod aggregator;
pub mod classifier;
pub mod convert;
pub mod decision;
pub mod splitter;
pub mod transition;

pub use aggregator::{AnalysisContext, EolTally, Histogram};
pub use classifier::{classify, LineKind};
pub use convert::{convert, convert_in_place, ConvertOptions};
pub use decision::decide;
pub use splitter::{Line, LineSplitter};
pub use transition::{transition, Bucket, Vote};

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::core::{Defaults, Verdict};

/// Which properties to detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub detect_eol: bool,
    pub detect_indent: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            detect_eol: true,
            detect_indent: true,
        }
    }
}

/// A verdict together with the evidence it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub verdict: Verdict,
    pub histogram: Histogram,
    pub eols: EolTally,
    pub processed_lines: usize,
    /// Transitions that produced a vote.
    pub indent_hints: usize,
}

/// Infers the formatting properties of `content`.
pub fn analyze(content: &str, options: AnalysisOptions, defaults: &Defaults) -> Verdict {
    analyze_report(content, options, defaults).verdict
}

/// Like [`analyze`], keeping the histogram and counters.
pub fn analyze_report(
    content: &str,
    options: AnalysisOptions,
    defaults: &Defaults,
) -> AnalysisReport {
    let _span = debug_span!("analyze", bytes = content.len()).entered();
    let mut ctx = AnalysisContext::new();

    if options.detect_eol || options.detect_indent {
        for line in LineSplitter::new(content) {
            if options.detect_eol {
                ctx.increment_eol(line.eol);
            }
            if options.detect_indent {
                ctx.feed_line(line.text);
            }
        }
    }

    let verdict = decide(ctx.histogram(), ctx.eols(), defaults);
    debug!(
        processed_lines = ctx.processed_lines(),
        indent_hints = ctx.indent_hints(),
        unix = ctx.eols().unix,
        dos = ctx.eols().dos,
        mac = ctx.eols().mac,
        max_space = ctx.histogram().max_space(),
        max_mixed = ctx.histogram().max_mixed(),
        max_tab = ctx.histogram().tab(),
        %verdict,
        "analysis finished"
    );

    AnalysisReport {
        verdict,
        histogram: ctx.histogram().clone(),
        eols: *ctx.eols(),
        processed_lines: ctx.processed_lines(),
        indent_hints: ctx.indent_hints(),
    }
}
