//! Converts the finished histogram into a verdict.
//!
//! A space-indented file produces far more `space*` votes than `mixed*` or
//! `tab` votes, a tab-indented file is dominated by `tab` votes, and a
//! mixed file produces at least as many `mixed*` votes as `tab` votes.
//! When no line goes beyond one tab stop, mixed indentation looks exactly
//! like space indentation and is reported as such.

use super::aggregator::{EolTally, Histogram};
use super::transition::{Bucket, MAX_STEP, MIN_STEP};
use crate::core::{Defaults, EolStyle, IndentStyle, Verdict, MIXED_TAB_WIDTH};

/// Picks the indentation width from one bucket family.
///
/// Widths are scanned from widest to narrowest; a narrower width only takes
/// over when its count beats the current leader by more than 10%.
pub fn pick_width(counts: impl Fn(usize) -> usize) -> Option<usize> {
    let mut best = 0usize;
    let mut width = None;

    for candidate in (MIN_STEP..=MAX_STEP).rev() {
        let count = counts(candidate);
        if count > best * 11 / 10 {
            best = count;
            width = Some(candidate);
        }
    }

    width
}

/// Applies the scoring rule to a finished run.
pub fn decide(histogram: &Histogram, eols: &EolTally, defaults: &Defaults) -> Verdict {
    let eol = decide_eol(eols, defaults);
    let fallback = defaults.verdict().with_eol(eol);

    let max_space = histogram.max_space();
    let max_mixed = histogram.max_mixed();
    let max_tab = histogram.tab();

    if max_space >= max_mixed && max_space > max_tab {
        match pick_width(|w| histogram.count(Bucket::Space(w))) {
            Some(width) => Verdict::new(eol, IndentStyle::Spaces, width, defaults.tab_width()),
            None => fallback,
        }
    } else if max_tab > max_mixed && max_tab > max_space {
        Verdict::new(
            eol,
            IndentStyle::Tabs,
            defaults.indent_width(),
            defaults.tab_width(),
        )
    } else if max_mixed >= max_tab && max_mixed > max_space {
        match pick_width(|w| histogram.count(Bucket::Mixed(w))) {
            Some(width) => Verdict::new(eol, IndentStyle::Mixed, width, MIXED_TAB_WIDTH),
            None => fallback,
        }
    } else {
        fallback
    }
}

/// EOL verdict alone, for callers that skipped indentation detection.
pub fn decide_eol(eols: &EolTally, defaults: &Defaults) -> EolStyle {
    eols.majority().unwrap_or_else(|| defaults.eol())
}
