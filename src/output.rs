//! Writing the combined set out as a blocklist file
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::set::{sorted_rules, HostSet};

/// The first line of every blocklist we write
pub const HEADER: &str = concat!("# Generated by ", env!("CARGO_PKG_NAME"));

/// Rules shorter than this (in characters) are left out of the output
pub const MIN_RULE_LEN: usize = 5;

/// Writes the header line, then each rule of `set` at least `MIN_RULE_LEN`
/// characters long, in lexicographic order, one per line, then a blank line.
/// Returns the number of rules written.
pub fn write_blocklist(set: &HostSet, mut out: impl io::Write) -> Result<usize> {
    let rules = sorted_rules(set, MIN_RULE_LEN);
    writeln!(out, "{HEADER}")?;
    for rule in &rules {
        writeln!(out, "{rule}")?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(rules.len())
}

/// Creates (or truncates) the file at `path` and writes the blocklist to it.
/// The file is closed when this returns, whether or not the write succeeded.
pub fn save(set: &HostSet, path: &Path) -> Result<usize> {
    let file =
        File::create(path).with_context(|| format!("Can't create file: {}", path.display()))?;
    write_blocklist(set, BufWriter::new(file))
        .with_context(|| format!("Error writing file: {}", path.display()))
}
