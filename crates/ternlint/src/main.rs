//! Command-line frontend: reads files, lints each one as its own unit, and
//! prints findings as text or JSON.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use ternlint_linter::settings::LinterSettings;
use ternlint_linter::check_source;

use crate::printer::{Message, OutputFormat};

mod logging;
mod printer;

#[derive(Debug, Parser)]
#[command(
    name = "ternlint",
    about = "A linter for ternary expressions",
    version
)]
struct Args {
    /// Files to lint.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output serialization format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,
    /// Enable verbose logging (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    logging::set_up_logging(args.verbose)?;

    let settings = match &args.config {
        Some(path) => LinterSettings::from_path(path)
            .with_context(|| format!("invalid configuration `{}`", path.display()))?,
        None => LinterSettings::default(),
    };
    debug!("resolved settings:\n{settings}");

    let mut stdout = std::io::stdout().lock();
    let mut messages = Vec::new();
    let mut sources = Vec::new();
    let mut failed = false;

    for path in &args.files {
        let filename = path.to_string_lossy().into_owned();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) => {
                logging::warn_user(&format!("failed to read `{filename}`: {error}"));
                failed = true;
                continue;
            }
        };
        sources.push((filename, source));
    }

    for (filename, source) in &sources {
        match check_source(source, &settings) {
            Ok(diagnostics) => {
                messages.extend(
                    diagnostics
                        .into_iter()
                        .map(|diagnostic| Message::from_diagnostic(diagnostic, filename, source)),
                );
            }
            Err(error) => {
                printer::write_parse_error(&mut stdout, filename, source, &error)?;
                failed = true;
            }
        }
    }

    match args.output_format {
        OutputFormat::Text => printer::write_text(&mut stdout, &messages)?,
        OutputFormat::Json => printer::write_json(&mut stdout, &messages)?,
    }
    stdout.flush()?;

    if failed || !messages.is_empty() {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
