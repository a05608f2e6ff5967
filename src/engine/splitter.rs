//! Line splitting with terminator recognition.

use crate::core::EolStyle;

/// One logical line of a buffer, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    /// Terminator that ended the line, `Undefined` for an unterminated final line.
    pub eol: EolStyle,
}

/// Lazily yields the lines of a buffer.
///
/// Recognizes `"\n"`, `"\r\n"` and a lone `"\r"`. A buffer ending with a
/// terminator does not produce a trailing empty line.
#[derive(Debug, Clone)]
pub struct LineSplitter<'a> {
    content: &'a str,
    offset: usize,
}

impl<'a> LineSplitter<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content, offset: 0 }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.content.as_bytes();
        let start = self.offset;
        if start >= bytes.len() {
            return None;
        }

        let Some(pos) = bytes[start..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map(|p| start + p)
        else {
            self.offset = bytes.len();
            return Some(Line {
                text: &self.content[start..],
                eol: EolStyle::Undefined,
            });
        };

        let eol = match bytes[pos] {
            b'\n' => EolStyle::Unix,
            _ if bytes.get(pos + 1) == Some(&b'\n') => EolStyle::Dos,
            _ => EolStyle::MacClassic,
        };
        self.offset = pos + eol.len();

        Some(Line {
            text: &self.content[start..pos],
            eol,
        })
    }
}
