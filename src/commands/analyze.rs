use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

use crate::batch::{analyze_files_sequential, analyze_files_with_progress, FileVerdict};
use crate::core::Defaults;
use crate::engine::AnalysisOptions;
use crate::formatting::FormattingConfig;
use crate::io::{collect_inputs, create_writer, FileWalker, OutputFormat};

const TEMPLATE_BAR: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} files";

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub options: AnalysisOptions,
    pub codec: String,
    pub explain: bool,
    pub defaults: Defaults,
    pub ignore_patterns: Vec<String>,
    pub max_depth: Option<usize>,
    pub hidden: bool,
    pub parallel: bool,
    pub jobs: usize,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let files = collect_inputs(&config.paths, |root| {
        FileWalker::new(root)
            .with_ignore_patterns(config.ignore_patterns.clone())
            .with_max_depth(config.max_depth)
            .with_hidden(config.hidden)
    })
    .context("Failed to enumerate input files")?;

    if files.is_empty() {
        log::warn!("No files found to analyze");
    }
    info!(files = files.len(), "analyzing");

    let results = run(&config, &files)?;

    if config.output.is_some() {
        FormattingConfig::plain().apply();
    } else {
        config.formatting.apply();
    }

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = create_writer(config.format, sink, config.explain);
    writer.write_verdicts(&results)?;

    Ok(())
}

fn run(config: &AnalyzeConfig, files: &[PathBuf]) -> Result<Vec<FileVerdict>> {
    if !config.parallel {
        return Ok(analyze_files_sequential(
            files,
            &config.codec,
            config.options,
            &config.defaults,
        ));
    }

    let progress = create_progress_bar(files.len());
    let analyze = || {
        analyze_files_with_progress(
            files,
            &config.codec,
            config.options,
            &config.defaults,
            Some(&progress),
        )
    };

    let results = if config.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()
            .context("Failed to build worker pool")?
            .install(analyze)
    } else {
        analyze()
    };

    progress.finish_and_clear();
    Ok(results)
}

fn create_progress_bar(len: usize) -> ProgressBar {
    if len < 2 || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE_BAR) {
        pb.set_style(style.progress_chars("█▓▒░  "));
    }
    pb
}
