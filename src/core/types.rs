//! Value types shared by the inference engine, the converter and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{Error, Result};

/// Tab stop width assumed by the mixed-indentation heuristic.
pub const MIXED_TAB_WIDTH: usize = 8;

/// End-of-line convention of a buffer.
///
/// Variant order matters: when two styles are tallied the same number of
/// times, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EolStyle {
    #[default]
    Unix,
    Dos,
    #[serde(rename = "mac", alias = "macclassic")]
    MacClassic,
    Undefined,
}

impl EolStyle {
    /// Styles that correspond to an actual terminator, in tie-break order.
    pub const DETECTABLE: [EolStyle; 3] = [EolStyle::Unix, EolStyle::Dos, EolStyle::MacClassic];

    /// Canonical terminator bytes for this style.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Dos => "\r\n",
            Self::MacClassic => "\r",
            Self::Undefined => "",
        }
    }

    /// Byte length of the terminator (0 for `Undefined`).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        self.marker().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Dos => "dos",
            Self::MacClassic => "mac",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for EolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Indentation convention of a buffer.
///
/// `Mixed` means whole tab stops are tabs and the remainder is spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tabs,
    #[default]
    Spaces,
    Mixed,
    Undefined,
}

impl IndentStyle {
    pub fn name(self) -> &'static str {
        match self {
            Self::Tabs => "tabs",
            Self::Spaces => "spaces",
            Self::Mixed => "mixed",
            Self::Undefined => "undefined",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Tabs => "Tabs",
            Self::Spaces => "Spaces",
            Self::Mixed => "Mixed",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The inferred formatting properties of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verdict {
    pub eol: EolStyle,
    pub indent: IndentStyle,
    /// Indentation step, in columns.
    pub indent_width: usize,
    /// Width of a tab character, in columns.
    pub tab_width: usize,
}

impl Verdict {
    pub fn new(eol: EolStyle, indent: IndentStyle, indent_width: usize, tab_width: usize) -> Self {
        Self {
            eol,
            indent,
            indent_width,
            tab_width,
        }
    }

    pub fn with_eol(mut self, eol: EolStyle) -> Self {
        self.eol = eol;
        self
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Defaults::default().verdict()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: tab {} indent {} - EOL: {}",
            self.indent.title(),
            self.tab_width,
            self.indent_width,
            self.eol
        )
    }
}

/// Fallback values used whenever a buffer yields no usable signal.
///
/// Built once at startup (from the config file and CLI flags) and read
/// without mutation for the duration of every analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    eol: EolStyle,
    indent: IndentStyle,
    indent_width: usize,
    tab_width: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            eol: EolStyle::Unix,
            indent: IndentStyle::Spaces,
            indent_width: 4,
            tab_width: 4,
        }
    }
}

impl Defaults {
    pub fn eol(&self) -> EolStyle {
        self.eol
    }

    pub fn set_eol(&mut self, eol: EolStyle) {
        self.eol = eol;
    }

    pub fn indent(&self) -> IndentStyle {
        self.indent
    }

    pub fn set_indent(&mut self, indent: IndentStyle) {
        self.indent = indent;
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    pub fn set_indent_width(&mut self, indent_width: usize) {
        self.indent_width = indent_width;
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width;
    }

    /// The bundled fallback verdict.
    pub fn verdict(&self) -> Verdict {
        Verdict::new(self.eol, self.indent, self.indent_width, self.tab_width)
    }

    /// Rejects values that could never have been inferred.
    pub fn validate(&self) -> Result<()> {
        if self.eol == EolStyle::Undefined {
            return Err(Error::Configuration(
                "default eol must be unix, dos or mac".to_string(),
            ));
        }
        if self.indent == IndentStyle::Undefined {
            return Err(Error::Configuration(
                "default indent must be tabs, spaces or mixed".to_string(),
            ));
        }
        if self.indent_width == 0 || self.tab_width == 0 {
            return Err(Error::Configuration(
                "default indent and tab widths must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
