//! Turns two consecutive line classifications into an indentation vote.

use std::fmt;

use super::classifier::LineKind;
use crate::core::MIXED_TAB_WIDTH;

/// Smallest and largest step widths the histogram tracks.
pub const MIN_STEP: usize = 2;
pub const MAX_STEP: usize = 8;

/// A named histogram counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Tab,
    Space(usize),
    Mixed(usize),
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tab => f.write_str("tab"),
            Self::Space(width) => write!(f, "space{width}"),
            Self::Mixed(width) => write!(f, "mixed{width}"),
        }
    }
}

/// Evidence produced by one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Tab,
    Space(usize),
    Mixed(usize),
    /// A step between two short space runs: counts for both space and
    /// mixed indentation of that width.
    SpaceOrMixed(usize),
}

impl Vote {
    /// The bucket reported for this vote.
    pub fn bucket(self) -> Bucket {
        match self {
            Self::Tab => Bucket::Tab,
            Self::Space(width) | Self::SpaceOrMixed(width) => Bucket::Space(width),
            Self::Mixed(width) => Bucket::Mixed(width),
        }
    }

    /// Every bucket credited by this vote.
    pub fn buckets(self) -> impl Iterator<Item = Bucket> {
        let (first, second) = match self {
            Self::Tab => (Bucket::Tab, None),
            Self::Space(width) => (Bucket::Space(width), None),
            Self::Mixed(width) => (Bucket::Mixed(width), None),
            Self::SpaceOrMixed(width) => (Bucket::Space(width), Some(Bucket::Mixed(width))),
        };
        std::iter::once(first).chain(second)
    }
}

/// Steps must be shorter than this many columns (one 8-column tab stop).
const STEP_LIMIT: isize = 8;

/// Accepts a step only when it lies strictly between 1 and [`STEP_LIMIT`].
fn step(delta: isize) -> Option<usize> {
    if 1 < delta && delta < STEP_LIMIT {
        Some(delta as usize)
    } else {
        None
    }
}

fn delta(current: usize, previous: usize) -> isize {
    current as isize - previous as isize
}

/// Decides whether moving from `previous` to `current` is an indentation
/// step and which bucket it supports.
///
/// A `Rejected` line on either side never votes.
pub fn transition(previous: &LineKind<'_>, current: &LineKind<'_>) -> Option<Vote> {
    use LineKind::*;

    match (previous, current) {
        (TabOnly(_) | NoIndent, TabOnly(tabs)) => {
            (delta(tabs.len(), previous.indent_len()) == 1).then_some(Vote::Tab)
        }
        (SpaceOnly(_) | BeginSpace(_) | NoIndent, SpaceOnly(spaces)) => {
            step(delta(spaces.len(), previous.indent_len())).map(Vote::Space)
        }
        (BeginSpace(_) | NoIndent, BeginSpace(spaces)) => {
            step(delta(spaces.len(), previous.indent_len())).map(Vote::SpaceOrMixed)
        }
        // more than one tab means this is not a sub-tab step
        (BeginSpace(spaces), TabOnly(tabs)) if tabs.len() == 1 => {
            step(delta(tabs.len() * MIXED_TAB_WIDTH, spaces.len())).map(Vote::Mixed)
        }
        (TabOnly(prev_tabs), Mixed { tabs, spaces }) if prev_tabs.len() == tabs.len() => {
            step(spaces.len() as isize).map(Vote::Mixed)
        }
        (Mixed { tabs: prev_tabs, spaces }, TabOnly(tabs)) if prev_tabs.len() + 1 == tabs.len() => {
            step(delta(MIXED_TAB_WIDTH, spaces.len())).map(Vote::Mixed)
        }
        _ => None,
    }
}
