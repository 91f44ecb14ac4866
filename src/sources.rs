//! The four upstream blocklists, and the rules for turning each one's text
//! into a `HostSet`.
//!
//! Every list has its own header (which we skip by counting lines) and its
//! own line format. Both are upstream conventions that can drift, so they
//! live here as named constants rather than inside the parsing code.
use std::fmt;

use crate::set::HostSet;

/// Lines of preamble at the top of the Easylist hosts file
pub const EASYLIST_HEADER_LINES: usize = 3;
/// The adaway.org hosts file has no preamble we need to skip
pub const ADAWAY_HEADER_LINES: usize = 0;
/// Lines of preamble at the top of Disconnect's simple ad list
pub const DISCONNECT_HEADER_LINES: usize = 3;
/// Lines of preamble at the top of the W3KBL list
pub const W3KBL_HEADER_LINES: usize = 6;

/// adaway.org lines look like `127.0.0.1 ads.example.com`
pub const LOOPBACK_PREFIX: &str = "127.0.0.1 ";
// We keep everything after the address, then trim.
const LOOPBACK_ADDRESS_LEN: usize = 9;

/// One of the upstream blocklists
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Source {
    /// Firebog's hosts-only rendition of Easylist
    Easylist,
    /// The adaway.org hosts file
    Adaway,
    /// Disconnect's simple ad-server list
    Disconnect,
    /// Firebog's static copy of the W3KBL list
    W3kbl,
}

/// How the body lines of a source (after its header) are turned into rules
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum LineFormat {
    /// The trimmed line is the rule
    Verbatim,
    /// `127.0.0.1 host` lines; anything else is ignored
    Hosts,
    /// The first whitespace-delimited word is the rule; the rest is commentary
    FirstWord,
}

impl Source {
    /// Every source, in the order we download them
    pub const ALL: [Source; 4] =
        [Source::Easylist, Source::Adaway, Source::Disconnect, Source::W3kbl];

    /// The name used in progress messages
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Source::Easylist => "EASYLIST",
            Source::Adaway => "ADAWAY",
            Source::Disconnect => "DISCONNECT",
            Source::W3kbl => "W3KBL",
        }
    }

    /// Where the list is downloaded from
    #[must_use]
    pub fn url(self) -> &'static str {
        match self {
            Source::Easylist => "https://v.firebog.net/hosts/Easylist.txt",
            Source::Adaway => "https://adaway.org/hosts.txt",
            Source::Disconnect => "https://s3.amazonaws.com/lists.disconnect.me/simple_ad.txt",
            Source::W3kbl => "https://v.firebog.net/hosts/static/w3kbl.txt",
        }
    }

    /// How many lines at the top of the list are skipped unconditionally
    #[must_use]
    pub fn header_lines(self) -> usize {
        match self {
            Source::Easylist => EASYLIST_HEADER_LINES,
            Source::Adaway => ADAWAY_HEADER_LINES,
            Source::Disconnect => DISCONNECT_HEADER_LINES,
            Source::W3kbl => W3KBL_HEADER_LINES,
        }
    }

    fn line_format(self) -> LineFormat {
        match self {
            Source::Easylist | Source::Disconnect => LineFormat::Verbatim,
            Source::Adaway => LineFormat::Hosts,
            Source::W3kbl => LineFormat::FirstWord,
        }
    }

    /// Parses the text of this source's list into a `HostSet`.
    ///
    /// The body is split on `\n`. After the header lines are skipped, each
    /// line is trimmed, and blank lines and `#` comments are dropped. What's
    /// left is handed to the source's line format. Lines the format doesn't
    /// recognize are skipped; parsing never fails.
    #[must_use]
    pub fn parse(self, body: &str) -> HostSet {
        let format = self.line_format();
        let mut hosts = HostSet::default();
        for line in body.split('\n').skip(self.header_lines()) {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(rule) = format.rule_in(line) {
                hosts.insert(rule.to_owned());
            }
        }
        hosts
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LineFormat {
    /// Returns the rule in `line` (already trimmed, nonblank, not a comment),
    /// if there is one.
    fn rule_in(self, line: &str) -> Option<&str> {
        match self {
            LineFormat::Verbatim => Some(line),
            LineFormat::Hosts => {
                if !line.starts_with(LOOPBACK_PREFIX) {
                    return None;
                }
                Some(line[LOOPBACK_ADDRESS_LEN..].trim())
            }
            LineFormat::FirstWord => line.split_whitespace().next(),
        }
    }
}
