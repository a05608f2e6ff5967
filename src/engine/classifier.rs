//! Per-line classification of leading whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of spaces this long or longer cannot be the remainder of an
/// 8-column tab stop.
pub const SPACE_RUN_LIMIT: usize = 8;

static INDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]+)([^ \t]+)").expect("indent pattern is valid"));
static MIXED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\t+)( +)$").expect("mixed pattern is valid"));

/// Whitespace kind of a line, carrying the indentation it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts with a non-whitespace character.
    NoIndent,
    /// Only spaces, at least [`SPACE_RUN_LIMIT`] of them.
    SpaceOnly(&'a str),
    /// Only spaces, fewer than [`SPACE_RUN_LIMIT`]: either space indentation
    /// or the sub-tab part of mixed indentation.
    BeginSpace(&'a str),
    /// Only tabs.
    TabOnly(&'a str),
    /// Tabs followed by a short run of spaces.
    Mixed { tabs: &'a str, spaces: &'a str },
    /// Comment, blank or irregular line. Never votes.
    Rejected,
}

impl<'a> LineKind<'a> {
    /// Length of the primary indentation run (tab part for `Mixed`).
    pub fn indent_len(&self) -> usize {
        match self {
            Self::NoIndent | Self::Rejected => 0,
            Self::SpaceOnly(ws) | Self::BeginSpace(ws) | Self::TabOnly(ws) => ws.len(),
            Self::Mixed { tabs, .. } => tabs.len(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Classifies the leading whitespace of one line (terminator excluded).
pub fn classify(line: &str) -> LineKind<'_> {
    if !line.is_empty() && !line.starts_with([' ', '\t']) {
        return LineKind::NoIndent;
    }

    let Some(caps) = INDENT_RE.captures(line) else {
        return LineKind::Rejected;
    };
    let (Some(indent), Some(token)) = (caps.get(1), caps.get(2)) else {
        return LineKind::Rejected;
    };
    let indent = indent.as_str();
    let token = token.as_str();

    // block comment continuation
    if token.starts_with('*') {
        return LineKind::Rejected;
    }
    if token.starts_with("/*") || token.starts_with('#') {
        return LineKind::Rejected;
    }

    let has_tab = indent.contains('\t');
    let has_space = indent.contains(' ');

    if has_tab && has_space {
        let Some(mixed) = MIXED_RE.captures(indent) else {
            return LineKind::Rejected;
        };
        let (Some(tabs), Some(spaces)) = (mixed.get(1), mixed.get(2)) else {
            return LineKind::Rejected;
        };
        if spaces.as_str().len() >= SPACE_RUN_LIMIT {
            return LineKind::Rejected;
        }
        return LineKind::Mixed {
            tabs: tabs.as_str(),
            spaces: spaces.as_str(),
        };
    }

    if has_tab {
        return LineKind::TabOnly(indent);
    }

    if indent.len() < SPACE_RUN_LIMIT {
        LineKind::BeginSpace(indent)
    } else {
        LineKind::SpaceOnly(indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_indent() {
        assert_eq!(classify("fn main() {"), LineKind::NoIndent);
    }

    #[test]
    fn test_empty_and_blank_lines_are_rejected() {
        assert_eq!(classify(""), LineKind::Rejected);
        assert_eq!(classify("    "), LineKind::Rejected);
        assert_eq!(classify("\t\t"), LineKind::Rejected);
    }

    #[test]
    fn test_comment_lines_are_rejected() {
        assert_eq!(classify("    # comment"), LineKind::Rejected);
        assert_eq!(classify("\t/* block */"), LineKind::Rejected);
        assert_eq!(classify("     * continued"), LineKind::Rejected);
        assert_eq!(classify("  */"), LineKind::Rejected);
    }

    #[test]
    fn test_line_comment_with_slashes_is_kept() {
        assert_eq!(classify("    // note"), LineKind::BeginSpace("    "));
    }

    #[test]
    fn test_space_runs() {
        assert_eq!(classify("  x"), LineKind::BeginSpace("  "));
        assert_eq!(classify("       x"), LineKind::BeginSpace("       "));
        assert_eq!(classify("        x"), LineKind::SpaceOnly("        "));
    }

    #[test]
    fn test_tab_run() {
        assert_eq!(classify("\t\tx = 1"), LineKind::TabOnly("\t\t"));
    }

    #[test]
    fn test_mixed_shape() {
        assert_eq!(
            classify("\t\t  x"),
            LineKind::Mixed {
                tabs: "\t\t",
                spaces: "  "
            }
        );
    }

    #[test]
    fn test_irregular_mixed_is_rejected() {
        assert_eq!(classify("  \tx"), LineKind::Rejected);
        assert_eq!(classify("\t \tx"), LineKind::Rejected);
    }

    #[test]
    fn test_long_space_remainder_is_rejected() {
        assert_eq!(classify("\t        x"), LineKind::Rejected);
    }

    #[test]
    fn test_indent_len() {
        assert_eq!(LineKind::NoIndent.indent_len(), 0);
        assert_eq!(classify("\t\t   y").indent_len(), 2);
        assert_eq!(classify("      y").indent_len(), 6);
    }
}
