//! Handles all user-facing output for the CLI.
//!
//! Everything is written to a `WriteColor` so commands can print to a
//! colored terminal and tests can capture plain text.

use std::io;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::bazel::{BuildFile, ModuleFile};
use crate::export::Exported;

// ============================================================================
// EXPORT OUTPUT
// ============================================================================

/// Prints the export root, then one `module fragment -> path` line per file.
pub fn print_exported(out: &mut dyn WriteColor, exported: &Exported) -> io::Result<()> {
    heading(out, "root")?;
    writeln!(out, " {}", exported.root().display())?;
    for (module, fragment, path) in exported.files() {
        let module = if module.is_empty() { "<root>" } else { module };
        writeln!(out, "{module} {fragment} -> {}", path.display())?;
    }
    Ok(())
}

// ============================================================================
// DOCUMENT OUTPUT
// ============================================================================

pub fn print_build_file(out: &mut dyn WriteColor, file: &BuildFile) -> io::Result<()> {
    heading(out, "name")?;
    writeln!(out, " {}", file.name().unwrap_or_default())?;
    print_values(out, "srcs", file.srcs())?;
    print_values(out, "deps", file.deps())
}

pub fn print_module_file(out: &mut dyn WriteColor, file: &ModuleFile) -> io::Result<()> {
    print_values(out, "artifacts", file.artifacts())?;
    print_values(out, "repositories", file.repositories())
}

fn print_values(out: &mut dyn WriteColor, label: &str, values: Option<Vec<&str>>) -> io::Result<()> {
    heading(out, label)?;
    writeln!(out)?;
    for value in values.unwrap_or_default() {
        writeln!(out, "  {value}")?;
    }
    Ok(())
}

/// Prints a line diff from `actual` to `canonical`. Returns whether they
/// differ.
pub fn print_canonical_diff(
    out: &mut dyn WriteColor,
    actual: &str,
    canonical: &str,
) -> io::Result<bool> {
    let changeset = Changeset::new(actual, canonical, "\n");
    if changeset.distance == 0 {
        writeln!(out, "file is in canonical form")?;
        return Ok(false);
    }
    print_diff(out, &changeset.diffs)?;
    Ok(true)
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn heading(out: &mut dyn WriteColor, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "{label}:")?;
    out.reset()
}

fn print_diff(out: &mut dyn WriteColor, diffs: &[Difference]) -> io::Result<()> {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                out.reset()?;
                print_lines(out, ' ', x)?;
            }
            Difference::Add(ref x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                print_lines(out, '+', x)?;
            }
            Difference::Rem(ref x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                print_lines(out, '-', x)?;
            }
        }
    }
    out.reset()
}

// A difference may span several lines; every one gets the marker.
fn print_lines(out: &mut dyn WriteColor, marker: char, text: &str) -> io::Result<()> {
    for line in text.lines() {
        writeln!(out, "{marker}{line}")?;
    }
    Ok(())
}
