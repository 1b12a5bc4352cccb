use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "zarrocrate")]
/// Checks OME-Zarr RO-Crate metadata documents
pub struct Args {
    /// Increase logging verbosity (-v, -vv, -vvv)
    ///
    /// The RUST_LOG environment variable takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a crate metadata document against the OME-Zarr RO-Crate profile
    ///
    /// Warnings are printed first, then errors.
    /// The command fails if and only if at least one error is found.
    Validate {
        /// The ro-crate-metadata.json file to validate
        ///
        /// If no file is given, stdin is used.
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// The output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List the datasets and files described by a crate metadata document
    Summarize {
        /// The ro-crate-metadata.json file to summarize
        ///
        /// If no file is given, stdin is used.
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// The output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}
