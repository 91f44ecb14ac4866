//! Houses the `combine` function, which decides which rules make it into the
//! final blocklist.
use crate::fetch::SourceSets;
use crate::set::{host_set_of, insert_intersection, HostSet};
use crate::sources::Source;

/// Rules we always block, whatever the upstream lists say
pub const CUSTOM_RULES: [&str; 9] = [
    // google
    "google-analytics.com",
    "google.com/adsense/search",
    "google.com/recaptcha",
    "gstatic.com/recaptcha/releases",
    // amazon
    "fls-na.amazon.com",
    "cloudfront-labs.amazonaws.com",
    r"unagi.amazon.com/\d/events",
    // other
    "match.adsrvr.org/track",
    // cookie popups
    "cdn.cookielaw.org",
];

/// A host is blocked if both lists of one of these pairs block it. Note that
/// Disconnect is only ever paired with W3KBL.
pub const INTERSECTED_PAIRS: [(Source, Source); 4] = [
    (Source::Adaway, Source::W3kbl),
    (Source::Adaway, Source::Easylist),
    (Source::Easylist, Source::W3kbl),
    (Source::W3kbl, Source::Disconnect),
];

/// Returns `custom ∪ (A₁ ∩ B₁) ∪ (A₂ ∩ B₂) ∪ …` for the pairs `(A, B)` in
/// `INTERSECTED_PAIRS`. A source missing from `sets` counts as empty.
#[must_use]
pub fn combine<'a>(custom: impl IntoIterator<Item = &'a str>, sets: &SourceSets) -> HostSet {
    let empty = HostSet::default();
    let hosts_of = |source: Source| sets.get(&source).unwrap_or(&empty);

    let mut combined = host_set_of(custom);
    for (a, b) in INTERSECTED_PAIRS {
        insert_intersection(&mut combined, hosts_of(a), hosts_of(b));
    }
    combined
}
