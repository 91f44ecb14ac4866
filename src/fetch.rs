//! Downloading the upstream lists. The rest of the crate sees the network
//! only through the `HttpGet` trait, so tests can swap in canned responses.
use std::borrow::Cow;
use std::io;

use anyhow::{bail, Context, Result};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use reqwest::StatusCode;

use crate::report::Reporter;
use crate::set::HostSet;
use crate::sources::Source;

/// The status and raw body of a completed GET request
pub struct Response {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Undecoded response body
    pub body: Vec<u8>,
}

/// The one network capability we need: GET a URL and hand back what came
/// back. A transport-level failure (DNS, connection refused, timeout) is an
/// `Err`; an HTTP error status is *not*, since the caller wants to report
/// the status before giving up.
pub trait HttpGet {
    /// Performs a GET request for `url`
    fn get(&self, url: &str) -> Result<Response>;
}

impl HttpGet for reqwest::blocking::Client {
    fn get(&self, url: &str) -> Result<Response> {
        let response = reqwest::blocking::Client::get(self, url)
            .send()
            .with_context(|| format!("Can't download {url}"))?;
        let status = response.status();
        let body = response.bytes().with_context(|| format!("Error reading response from {url}"))?;
        Ok(Response { status, body: body.to_vec() })
    }
}

/// Returns the blocking `reqwest` client used for every download. Timeouts
/// and redirect handling are `reqwest`'s defaults.
pub fn client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Can't initialize the HTTP client")
}

/// The hosts parsed from one source
pub struct Fetched {
    /// Which list the hosts came from
    pub source: Source,
    /// The parsed rules
    pub hosts: HostSet,
}

/// The parsed hosts of every source, keyed by source
pub type SourceSets = IndexMap<Source, HostSet, FxBuildHasher>;

/// Downloads and parses `source`, reporting the response status and the
/// number of hosts found.
pub fn fetch<W: io::Write>(
    client: &impl HttpGet,
    source: Source,
    report: &mut Reporter<W>,
) -> Result<Fetched> {
    let url = source.url();
    let response = client.get(url)?;
    report.response(response.status, url)?;
    if !response.status.is_success() {
        bail!("{source} list at {url} returned {}", response.status);
    }
    let hosts = source.parse(&decode_body(&response.body));
    report.found(source, hosts.len())?;
    Ok(Fetched { source, hosts })
}

/// Downloads every source, one after the other. The first failure ends the
/// whole run: the combined list needs all of them.
pub fn fetch_all<W: io::Write>(
    client: &impl HttpGet,
    report: &mut Reporter<W>,
) -> Result<SourceSets> {
    let mut sets = SourceSets::default();
    for source in Source::ALL {
        let Fetched { source, hosts } = fetch(client, source, report)?;
        sets.insert(source, hosts);
    }
    Ok(sets)
}

/// Decodes a response body as UTF-8 text.
///
/// The lists are plain ASCII in practice, but if one shows up with a UTF-16
/// Byte Order Mark we translate it, and a UTF-8 BOM is removed so it can't
/// end up glued to the first line. Malformed sequences become the Unicode
/// REPLACEMENT CHARACTER rather than failing the run; at worst that spoils a
/// line, which then matches nothing in the other lists.
fn decode_body(body: &[u8]) -> Cow<'_, str> {
    let (text, _encoding, _had_malformed_sequences) = encoding_rs::UTF_8.decode(body);
    text
}
