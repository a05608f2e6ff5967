//! Rewrites a buffer from one verdict to another.
//!
//! Indentation is rewritten textually, not by column: when narrowing tabs
//! every tab is doubled before runs of spaces are folded, which is only
//! approximate for buffers with irregular indentation depths.

use super::splitter::LineSplitter;
use crate::core::{EolStyle, Error, IndentStyle, Result, Verdict};

/// Which halves of the conversion to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub eol: bool,
    pub indent: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            eol: true,
            indent: true,
        }
    }
}

/// Returns `content` rewritten from the `from` style to the `to` style.
pub fn convert(
    content: &str,
    from: &Verdict,
    to: &Verdict,
    options: ConvertOptions,
) -> Result<String> {
    if content.is_empty() || (!options.eol && !options.indent) || from == to {
        return Ok(content.to_string());
    }

    if options.indent {
        validate_target(to)?;
    }

    let rewrite_eol = options.eol && to.eol != EolStyle::Undefined;
    let mut out = String::with_capacity(content.len());

    for line in LineSplitter::new(content) {
        if options.indent {
            let span = indent_span(line.text);
            if span > 0 {
                out.push_str(&reindent(&line.text[..span], from, to));
                out.push_str(&line.text[span..]);
            } else {
                out.push_str(line.text);
            }
        } else {
            out.push_str(line.text);
        }

        let eol = if rewrite_eol && line.eol != EolStyle::Undefined {
            to.eol
        } else {
            line.eol
        };
        out.push_str(eol.marker());
    }

    Ok(out)
}

/// In-place variant of [`convert`].
pub fn convert_in_place(
    content: &mut String,
    from: &Verdict,
    to: &Verdict,
    options: ConvertOptions,
) -> Result<()> {
    let converted = convert(content, from, to, options)?;
    *content = converted;
    Ok(())
}

fn validate_target(to: &Verdict) -> Result<()> {
    debug_assert!(
        to.indent != IndentStyle::Undefined,
        "conversion target indent style must be defined"
    );
    if to.indent == IndentStyle::Undefined {
        return Err(Error::InvalidTarget(
            "indent style is undefined".to_string(),
        ));
    }
    if to.tab_width == 0 {
        return Err(Error::InvalidTarget("tab width must be positive".to_string()));
    }
    Ok(())
}

/// Length of the leading tab/space run of a line.
fn indent_span(text: &str) -> usize {
    text.bytes()
        .position(|b| b != b' ' && b != b'\t')
        .unwrap_or(text.len())
}

fn reindent(indent: &str, from: &Verdict, to: &Verdict) -> String {
    let tab_as_spaces = " ".repeat(to.tab_width);

    match to.indent {
        IndentStyle::Tabs => {
            let widened = if from.tab_width > to.tab_width {
                indent.replace('\t', "\t\t")
            } else {
                indent.to_string()
            };
            widened.replace(&tab_as_spaces, "\t")
        }
        IndentStyle::Spaces => indent.replace('\t', &tab_as_spaces),
        IndentStyle::Mixed => indent
            .replace('\t', &tab_as_spaces)
            .replace(&tab_as_spaces, "\t"),
        IndentStyle::Undefined => unreachable!("target validated before rewriting"),
    }
}
