use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::core::{Defaults, EolStyle, IndentStyle, Verdict, MIXED_TAB_WIDTH};
use crate::engine::{analyze, convert, AnalysisOptions, ConvertOptions};
use crate::io::{read_decoded, write_file};

/// Requested target style; unset fields inherit from the detected source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetSpec {
    pub eol: Option<EolStyle>,
    pub indent: Option<IndentStyle>,
    pub indent_width: Option<usize>,
    pub tab_width: Option<usize>,
}

impl TargetSpec {
    pub fn resolve(&self, source: &Verdict) -> Verdict {
        let indent = self.indent.unwrap_or(source.indent);
        let tab_width = self.tab_width.unwrap_or(match indent {
            IndentStyle::Mixed if source.indent != IndentStyle::Mixed => MIXED_TAB_WIDTH,
            _ => source.tab_width,
        });

        Verdict::new(
            self.eol.unwrap_or(source.eol),
            indent,
            self.indent_width.unwrap_or(source.indent_width),
            tab_width,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub path: PathBuf,
    pub target: TargetSpec,
    pub options: ConvertOptions,
    pub codec: String,
    pub defaults: Defaults,
    pub output: Option<PathBuf>,
    pub in_place: bool,
}

pub fn handle_convert(config: ConvertConfig) -> Result<()> {
    let decoded = read_decoded(&config.path, &config.codec)
        .with_context(|| format!("Failed to read {}", config.path.display()))?;

    let in_place = config.output.is_none() && config.in_place;
    if in_place && decoded.had_errors {
        anyhow::bail!(
            "{} is not valid {}; refusing to rewrite it in place",
            config.path.display(),
            decoded.encoding.name()
        );
    }

    let source = analyze(&decoded.text, AnalysisOptions::default(), &config.defaults);
    let target = config.target.resolve(&source);
    info!(%source, %target, path = %config.path.display(), "converting");

    let converted = convert(&decoded.text, &source, &target, config.options)?;
    let bytes = decoded
        .encode(&converted)
        .with_context(|| format!("Failed to encode {}", config.path.display()))?;

    match &config.output {
        Some(path) => write_file(path, &bytes)?,
        None if in_place => write_file(&config.path, &bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn in_place(path: PathBuf, codec: &str, indent: IndentStyle) -> ConvertConfig {
        ConvertConfig {
            path,
            target: TargetSpec {
                indent: Some(indent),
                tab_width: Some(4),
                ..Default::default()
            },
            options: ConvertOptions::default(),
            codec: codec.to_string(),
            defaults: Defaults::default(),
            output: None,
            in_place: true,
        }
    }

    #[test]
    fn test_in_place_keeps_latin1_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("legacy.txt");
        fs::write(&path, b"a\n\tcaf\xE9\n").unwrap();

        handle_convert(in_place(path.clone(), "windows-1252", IndentStyle::Spaces)).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"a\n    caf\xE9\n");
    }

    #[test]
    fn test_in_place_keeps_utf8_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bom.txt");
        fs::write(&path, b"\xEF\xBB\xBFa\n    b\n").unwrap();

        handle_convert(in_place(path.clone(), "utf-8", IndentStyle::Tabs)).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"\xEF\xBB\xBFa\n\tb\n");
    }

    #[test]
    fn test_in_place_refuses_malformed_input() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.txt");
        let original = b"a\n\tcaf\xE9\n".to_vec();
        fs::write(&path, &original).unwrap();

        let result = handle_convert(in_place(path.clone(), "utf-8", IndentStyle::Spaces));

        assert!(result.is_err());
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_resolve_inherits_source() {
        let source = Verdict::new(EolStyle::Dos, IndentStyle::Tabs, 4, 4);
        let spec = TargetSpec {
            indent: Some(IndentStyle::Spaces),
            ..Default::default()
        };
        assert_eq!(
            spec.resolve(&source),
            Verdict::new(EolStyle::Dos, IndentStyle::Spaces, 4, 4)
        );
    }

    #[test]
    fn test_resolve_mixed_uses_eight_column_tabs() {
        let source = Verdict::new(EolStyle::Unix, IndentStyle::Spaces, 4, 4);
        let spec = TargetSpec {
            indent: Some(IndentStyle::Mixed),
            ..Default::default()
        };
        assert_eq!(spec.resolve(&source).tab_width, 8);

        let explicit = TargetSpec {
            indent: Some(IndentStyle::Mixed),
            tab_width: Some(4),
            ..Default::default()
        };
        assert_eq!(explicit.resolve(&source).tab_width, 4);
    }
}
