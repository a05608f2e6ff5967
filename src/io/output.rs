use colored::*;
use serde::Serialize;
use std::io::Write;

use crate::batch::FileVerdict;
use crate::core::IndentStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_verdicts(&mut self, results: &[FileVerdict]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    path: String,
    readable: bool,
    #[serde(flatten)]
    verdict: &'a crate::core::Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    evidence: Option<&'a crate::engine::AnalysisReport>,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_verdicts(&mut self, results: &[FileVerdict]) -> anyhow::Result<()> {
        let entries: Vec<_> = results
            .iter()
            .map(|r| JsonEntry {
                path: r.path.display().to_string(),
                readable: r.readable,
                verdict: &r.verdict,
                evidence: r.report.as_ref().filter(|_| self.explain),
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_verdicts(&mut self, results: &[FileVerdict]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Document Properties")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| File | Indent | Indent width | Tab width | EOL |")?;
        writeln!(self.writer, "|------|--------|--------------|-----------|-----|")?;
        for result in results {
            let v = &result.verdict;
            let marker = if result.readable { "" } else { " (unreadable)" };
            writeln!(
                self.writer,
                "| {}{} | {} | {} | {} | {} |",
                result.path.display(),
                marker,
                v.indent,
                v.indent_width,
                v.tab_width,
                v.eol
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }

    fn write_evidence(&mut self, result: &FileVerdict) -> anyhow::Result<()> {
        let Some(report) = &result.report else {
            return Ok(());
        };

        writeln!(
            self.writer,
            "    {} lines, {} indent hints, eol unix {} / dos {} / mac {}",
            report.processed_lines,
            report.indent_hints,
            report.eols.unix,
            report.eols.dos,
            report.eols.mac
        )?;

        let buckets: Vec<String> = report
            .histogram
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(bucket, count)| format!("{bucket}: {count}"))
            .collect();
        if !buckets.is_empty() {
            writeln!(self.writer, "    {}", buckets.join(", ").dimmed())?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_verdicts(&mut self, results: &[FileVerdict]) -> anyhow::Result<()> {
        for result in results {
            let summary = result.verdict.to_string();
            let styled = match result.verdict.indent {
                _ if !result.readable => summary.red(),
                IndentStyle::Tabs => summary.cyan(),
                IndentStyle::Spaces => summary.green(),
                IndentStyle::Mixed => summary.yellow(),
                IndentStyle::Undefined => summary.normal(),
            };
            let note = if result.readable { "" } else { " (unreadable, defaults)" };
            writeln!(
                self.writer,
                "{} {}{}",
                result.path.display().to_string().bold(),
                styled,
                note
            )?;

            if self.explain {
                self.write_evidence(result)?;
            }
        }
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    explain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer, explain)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, explain)),
    }
}
