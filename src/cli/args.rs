//! Command-line arguments of the `packagetest` binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "packagetest",
    version,
    about = "Generates Maven and Bazel project trees for testing build tooling."
)]
pub struct PackagetestArgs {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export the project described by a manifest.
    Export {
        /// A JSON (.json) or YAML (.yaml, .yml) project manifest.
        #[arg(required = true)]
        manifest: PathBuf,
        /// Directory to export into. A fresh temporary directory by default.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Parse a BUILD or MODULE file and print the values it holds.
    Check {
        /// The file to parse. BUILD, BUILD.bazel and MODULE.bazel are known.
        #[arg(required = true)]
        file: PathBuf,
        /// Show a diff against the canonical rendering of the file.
        #[arg(long)]
        diff: bool,
    },
}
