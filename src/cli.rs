use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{Defaults, EolStyle, IndentStyle};

#[derive(Parser, Debug)]
#[command(name = "docprops")]
#[command(about = "Detect and convert line endings and indentation style", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EolArg {
    Unix,
    Dos,
    Mac,
}

impl From<EolArg> for EolStyle {
    fn from(eol: EolArg) -> Self {
        match eol {
            EolArg::Unix => Self::Unix,
            EolArg::Dos => Self::Dos,
            EolArg::Mac => Self::MacClassic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndentArg {
    Tabs,
    Spaces,
    Mixed,
}

impl From<IndentArg> for IndentStyle {
    fn from(indent: IndentArg) -> Self {
        match indent {
            IndentArg::Tabs => Self::Tabs,
            IndentArg::Spaces => Self::Spaces,
            IndentArg::Mixed => Self::Mixed,
        }
    }
}

/// Overrides for the fallback verdict
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DefaultsArgs {
    /// Line ending assumed when a file has none
    #[arg(long, value_enum)]
    pub default_eol: Option<EolArg>,

    /// Indentation assumed when a file gives no signal
    #[arg(long, value_enum)]
    pub default_indent: Option<IndentArg>,

    /// Indent width assumed when a file gives no signal
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub default_indent_width: Option<u32>,

    /// Tab width assumed when a file gives no signal
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub default_tab_width: Option<u32>,
}

impl DefaultsArgs {
    /// Overlays the flags that were given onto `defaults`.
    pub fn apply(&self, defaults: &mut Defaults) {
        if let Some(eol) = self.default_eol {
            defaults.set_eol(eol.into());
        }
        if let Some(indent) = self.default_indent {
            defaults.set_indent(indent.into());
        }
        if let Some(width) = self.default_indent_width {
            defaults.set_indent_width(width as usize);
        }
        if let Some(width) = self.default_tab_width {
            defaults.set_tab_width(width as usize);
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect line endings and indentation of files
    Analyze {
        /// Files or directories to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip line ending detection
        #[arg(long = "no-eol")]
        no_eol: bool,

        /// Skip indentation detection
        #[arg(long = "no-indent")]
        no_indent: bool,

        /// Text encoding of the input files
        #[arg(long, env = "DOCPROPS_CODEC")]
        codec: Option<String>,

        /// Include the vote histogram behind each verdict
        #[arg(long)]
        explain: bool,

        #[command(flatten)]
        defaults: DefaultsArgs,

        /// Disable parallel processing
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Plain output (no colors)
        #[arg(long)]
        plain: bool,
    },

    /// Rewrite a file's line endings and indentation
    Convert {
        /// File to convert
        path: PathBuf,

        /// Target line ending (defaults to the detected one)
        #[arg(long, value_enum)]
        eol: Option<EolArg>,

        /// Target indentation (defaults to the detected one)
        #[arg(long, value_enum)]
        indent: Option<IndentArg>,

        /// Target indent width
        #[arg(long = "indent-width", value_parser = clap::value_parser!(u32).range(1..))]
        indent_width: Option<u32>,

        /// Target tab width
        #[arg(long = "tab-width", value_parser = clap::value_parser!(u32).range(1..))]
        tab_width: Option<u32>,

        /// Leave line endings untouched
        #[arg(long = "no-eol")]
        no_eol: bool,

        /// Leave indentation untouched
        #[arg(long = "no-indent")]
        no_indent: bool,

        /// Text encoding of the input file
        #[arg(long, env = "DOCPROPS_CODEC")]
        codec: Option<String>,

        #[command(flatten)]
        defaults: DefaultsArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file
        #[arg(long = "in-place")]
        in_place: bool,
    },

    /// Initialize a docprops configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
