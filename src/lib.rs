//! The `update` function is the kernel of the application: it downloads each
//! upstream blocklist, combines them, and writes the result. The `args`
//! module parses the command line, the `fetch` module hides the network, and
//! the `report` module prints progress.
//!
//! A host from an upstream list is kept only if the other list of one of the
//! pairs in `combine::INTERSECTED_PAIRS` blocks it too. The handful of
//! `combine::CUSTOM_RULES` are always kept.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

use anyhow::Result;
use std::io;
use std::path::Path;

pub mod args;
pub mod combine;
pub mod fetch;
pub mod output;
pub mod report;
pub mod set;
pub mod sources;

use crate::fetch::HttpGet;
use crate::report::Reporter;

/// Downloads every source through `client`, combines them with the custom
/// rules, and writes the blocklist to `output_path`. Progress goes to
/// `report`. Returns the number of rules written.
///
/// Any download failure or HTTP error status ends the run before the output
/// file is touched.
pub fn update<W: io::Write>(
    client: &impl HttpGet,
    output_path: &Path,
    report: &mut Reporter<W>,
) -> Result<usize> {
    let sets = fetch::fetch_all(client, report)?;
    let combined = combine::combine(combine::CUSTOM_RULES, &sets);
    let written = output::save(&combined, output_path)?;
    report.written(written, output_path)?;
    Ok(written)
}
