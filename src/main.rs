use anyhow::{Context, Result};
use clap::Parser;
use docprops::cli::{Cli, Commands, DefaultsArgs};
use docprops::commands::{AnalyzeConfig, ConvertConfig, TargetSpec};
use docprops::config::{load_config, DocpropsConfig};
use docprops::core::Defaults;
use docprops::engine::{AnalysisOptions, ConvertOptions};
use docprops::formatting::{ColorMode, FormattingConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = load_config();

    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            no_eol,
            no_indent,
            codec,
            explain,
            defaults,
            no_parallel,
            jobs,
            plain,
        } => {
            let analyze_config = AnalyzeConfig {
                paths,
                format: format.into(),
                output,
                options: AnalysisOptions {
                    detect_eol: !no_eol,
                    detect_indent: !no_indent,
                },
                codec: resolve_codec(codec, &config),
                explain,
                defaults: resolve_defaults(&config, &defaults)?,
                ignore_patterns: config.ignore_patterns(),
                max_depth: config.max_depth(),
                hidden: config.include_hidden(),
                parallel: !no_parallel,
                jobs,
                formatting: create_formatting_config(plain),
            };
            docprops::commands::handle_analyze(analyze_config)
        }
        Commands::Convert {
            path,
            eol,
            indent,
            indent_width,
            tab_width,
            no_eol,
            no_indent,
            codec,
            defaults,
            output,
            in_place,
        } => {
            let convert_config = ConvertConfig {
                path,
                target: TargetSpec {
                    eol: eol.map(Into::into),
                    indent: indent.map(Into::into),
                    indent_width: indent_width.map(|w| w as usize),
                    tab_width: tab_width.map(|w| w as usize),
                },
                options: ConvertOptions {
                    eol: !no_eol,
                    indent: !no_indent,
                },
                codec: resolve_codec(codec, &config),
                defaults: resolve_defaults(&config, &defaults)?,
                output,
                in_place,
            };
            docprops::commands::handle_convert(convert_config)
        }
        Commands::Init { force } => docprops::commands::init_config(force),
    }
}

// RUST_LOG wins over -v flags
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

// Built-in defaults, then the config file, then CLI flags
fn resolve_defaults(config: &DocpropsConfig, args: &DefaultsArgs) -> Result<Defaults> {
    let mut defaults = config.resolved_defaults();
    args.apply(&mut defaults);
    defaults.validate().context("Invalid default style")?;
    Ok(defaults)
}

fn resolve_codec(codec: Option<String>, config: &DocpropsConfig) -> String {
    codec.unwrap_or_else(|| config.codec().to_string())
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
