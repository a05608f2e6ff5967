//! Per-run vote counters and the state carried between lines.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::classifier::{classify, LineKind};
use super::transition::{transition, Bucket, MAX_STEP, MIN_STEP};
use crate::core::EolStyle;

const WIDTHS: usize = MAX_STEP - MIN_STEP + 1;

/// Counts of indentation votes per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    tab: usize,
    space: [usize; WIDTHS],
    mixed: [usize; WIDTHS],
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, bucket: Bucket) {
        if let Some(slot) = self.slot_mut(bucket) {
            *slot += 1;
        }
    }

    /// Count for a bucket; buckets outside `tab`, `space2..8`, `mixed2..8` are 0.
    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Tab => self.tab,
            Bucket::Space(width) => index(width).map_or(0, |i| self.space[i]),
            Bucket::Mixed(width) => index(width).map_or(0, |i| self.mixed[i]),
        }
    }

    pub fn tab(&self) -> usize {
        self.tab
    }

    pub fn max_space(&self) -> usize {
        self.space.iter().copied().max().unwrap_or(0)
    }

    pub fn max_mixed(&self) -> usize {
        self.mixed.iter().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All buckets, `tab` first, then spaces and mixed by ascending width.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, usize)> + '_ {
        let widths = MIN_STEP..=MAX_STEP;
        std::iter::once(Bucket::Tab)
            .chain(widths.clone().map(Bucket::Space))
            .chain(widths.map(Bucket::Mixed))
            .map(|bucket| (bucket, self.count(bucket)))
    }

    fn slot_mut(&mut self, bucket: Bucket) -> Option<&mut usize> {
        match bucket {
            Bucket::Tab => Some(&mut self.tab),
            Bucket::Space(width) => index(width).map(|i| &mut self.space[i]),
            Bucket::Mixed(width) => index(width).map(|i| &mut self.mixed[i]),
        }
    }
}

fn index(width: usize) -> Option<usize> {
    (MIN_STEP..=MAX_STEP)
        .contains(&width)
        .then(|| width - MIN_STEP)
}

// Serialized as `{"space4": 12, ...}`, non-zero buckets only.
impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (bucket, count) in self.iter().filter(|(_, count)| *count > 0) {
            map.serialize_entry(&bucket.to_string(), &count)?;
        }
        map.end()
    }
}

/// Number of terminators seen per EOL style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct EolTally {
    pub unix: usize,
    pub dos: usize,
    pub mac: usize,
}

impl EolTally {
    pub fn increment(&mut self, eol: EolStyle) {
        match eol {
            EolStyle::Unix => self.unix += 1,
            EolStyle::Dos => self.dos += 1,
            EolStyle::MacClassic => self.mac += 1,
            EolStyle::Undefined => {}
        }
    }

    pub fn count(&self, eol: EolStyle) -> usize {
        match eol {
            EolStyle::Unix => self.unix,
            EolStyle::Dos => self.dos,
            EolStyle::MacClassic => self.mac,
            EolStyle::Undefined => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.unix + self.dos + self.mac
    }

    /// Most frequent style; ties go to the earlier style. `None` if nothing was tallied.
    pub fn majority(&self) -> Option<EolStyle> {
        let mut best: Option<(EolStyle, usize)> = None;
        for eol in EolStyle::DETECTABLE {
            let count = self.count(eol);
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((eol, count));
            }
        }
        best.map(|(eol, _)| eol)
    }
}

/// State of one analysis run.
///
/// Created fresh for every buffer, so concurrent analyses never share
/// counters or the previous-line classification.
#[derive(Debug, Clone)]
pub struct AnalysisContext<'a> {
    histogram: Histogram,
    eols: EolTally,
    previous: LineKind<'a>,
    skip_next_line: bool,
    processed_lines: usize,
    indent_hints: usize,
}

impl Default for AnalysisContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> AnalysisContext<'a> {
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(),
            eols: EolTally::default(),
            previous: LineKind::Rejected,
            skip_next_line: false,
            processed_lines: 0,
            indent_hints: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn increment(&mut self, bucket: Bucket) {
        self.histogram.increment(bucket);
    }

    pub fn increment_eol(&mut self, eol: EolStyle) {
        self.eols.increment(eol);
    }

    /// Runs one line through classification and voting.
    ///
    /// A line following one that ends in `\` is counted but otherwise
    /// ignored, and does not replace the previous classification.
    pub fn feed_line(&mut self, line: &'a str) -> Option<Bucket> {
        self.processed_lines += 1;
        let skip_current = std::mem::replace(&mut self.skip_next_line, line.ends_with('\\'));
        if skip_current {
            return None;
        }

        let current = classify(line);
        let previous = std::mem::replace(&mut self.previous, current);
        let vote = transition(&previous, &current)?;

        for bucket in vote.buckets() {
            self.histogram.increment(bucket);
        }
        self.indent_hints += 1;
        Some(vote.bucket())
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn eols(&self) -> &EolTally {
        &self.eols
    }

    pub fn processed_lines(&self) -> usize {
        self.processed_lines
    }

    pub fn indent_hints(&self) -> usize {
        self.indent_hints
    }
}
