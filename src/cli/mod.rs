//! The packagetest command-line interface.
//!
//! `export` lays a manifest's project out on disk; `check` reads a Bazel
//! document back with every leaf captured.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser;
use miette::Report;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bazel::{BuildFile, ModuleFile};
use crate::cli::args::{Command, PackagetestArgs};
use crate::config::ProjectManifest;
use crate::errors::{CliError, ReadError};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = PackagetestArgs::parse();
    init_tracing(args.verbose);

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let result = match args.command {
        Command::Export { manifest, out } => handle_export(&mut stdout, &manifest, out.as_deref()),
        Command::Check { file, diff } => handle_check(&mut stdout, &file, diff),
    };

    if let Err(e) = result {
        eprintln!("{:?}", Report::new(e));
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_export(
    out: &mut dyn WriteColor,
    manifest: &Path,
    root: Option<&Path>,
) -> Result<(), CliError> {
    let manifest = ProjectManifest::load(manifest)?;
    let exported = manifest.export(root)?;
    info!(root = %exported.root().display(), "export done");
    output::print_exported(out, &exported).map_err(CliError::Io)?;
    Ok(())
}

/// A Bazel document read back from disk.
#[derive(Debug)]
enum Document {
    Build(BuildFile),
    Module(ModuleFile),
}

impl Document {
    fn to_text(&self) -> String {
        match self {
            Document::Build(file) => file.to_text(),
            Document::Module(file) => file.to_text(),
        }
    }

    fn print(&self, out: &mut dyn WriteColor) -> std::io::Result<()> {
        match self {
            Document::Build(file) => output::print_build_file(out, file),
            Document::Module(file) => output::print_module_file(out, file),
        }
    }
}

fn read_document(path: &Path, source: &str) -> Result<Document, CliError> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    match name {
        "BUILD" | "BUILD.bazel" => {
            // Sources may be a glob or a plain list; keep whichever reading
            // got further.
            let globbed = BuildFile::builder().srcs_glob().build();
            let glob_err = match globbed.read_str(source) {
                Ok(()) => return Ok(Document::Build(globbed)),
                Err(e) => e,
            };
            let plain = BuildFile::builder().build();
            match plain.read_str(source) {
                Ok(()) => Ok(Document::Build(plain)),
                Err(plain_err) => {
                    let error = if plain_err.offset > glob_err.offset {
                        plain_err
                    } else {
                        glob_err
                    };
                    Err(ReadError::syntax(path.display().to_string(), source, error).into())
                }
            }
        }
        "MODULE.bazel" => {
            let module = ModuleFile::builder().build();
            module
                .read_str(source)
                .map_err(|e| ReadError::syntax(path.display().to_string(), source, e))?;
            Ok(Document::Module(module))
        }
        _ => Err(CliError::UnknownDocument {
            path: path.to_path_buf(),
        }),
    }
}

fn handle_check(out: &mut dyn WriteColor, path: &Path, diff: bool) -> Result<(), CliError> {
    let source = fs::read_to_string(path).map_err(ReadError::Io)?;
    let document = read_document(path, &source)?;
    document.print(out).map_err(CliError::Io)?;
    if diff {
        output::print_canonical_diff(out, &source, &document.to_text()).map_err(CliError::Io)?;
    }
    Ok(())
}
