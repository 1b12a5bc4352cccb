use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal, Write, stdin, stdout};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zarrocrate::{CrateDocument, ValidationReport};

mod cli;

use cli::{Args, Command, OutputFormat};

pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    match run(args.command) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Validate { file, format } => {
            let document = load(file.as_deref())?;
            let report = document.validate();
            tracing::info!(
                errors = report.error_count(),
                warnings = report.warning_count(),
                "validation finished"
            );
            let mut out = stdout().lock();
            match format {
                OutputFormat::Text => write_report(&mut out, &report)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &report)?;
                    writeln!(out)?;
                }
            }
            out.flush()?;
            Ok(if report.conforms() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Summarize { file, format } => {
            let summary = load(file.as_deref())?.summarize();
            let mut out = stdout().lock();
            match format {
                OutputFormat::Text => write!(out, "{summary}")?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &summary)?;
                    writeln!(out)?;
                }
            }
            out.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(file: Option<&Path>) -> anyhow::Result<CrateDocument> {
    if let Some(file) = file {
        tracing::debug!(file = %file.display(), "reading crate metadata");
        CrateDocument::from_path(file)
            .with_context(|| format!("Failed to load crate metadata from {}", file.display()))
    } else {
        tracing::debug!("reading crate metadata from stdin");
        CrateDocument::from_reader(stdin().lock())
            .context("Failed to load crate metadata from stdin")
    }
}

fn write_report(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    if !report.warnings().is_empty() {
        writeln!(out, "Warnings:")?;
        for warning in report.warnings() {
            writeln!(out, " - {warning}")?;
        }
    }
    if report.errors().is_empty() {
        writeln!(out, "Crate passed minimal checks.")?;
    } else {
        writeln!(out, "Errors:")?;
        for error in report.errors() {
            writeln!(out, " - {error}")?;
        }
    }
    Ok(())
}
