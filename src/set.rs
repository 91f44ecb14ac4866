//! Provides the `HostSet` type and the few set operations the rest of the
//! crate needs.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

/// A `HostSet` is a set of block rules: bare hostnames like `adaway.org`, or
/// hostname-plus-path fragments like `google.com/recaptcha`.
/// * Members are owned `String`s, since every source's text is dropped as
///   soon as it has been parsed.
/// * The set keeps insertion order, but nothing downstream relies on that:
///   the only ordering that matters is the lexicographic order imposed by
///   `sorted_rules` just before output.
pub type HostSet = IndexSet<String, FxBuildHasher>;

/// Returns a `HostSet` containing each of `rules`
#[must_use]
pub fn host_set_of<'a>(rules: impl IntoIterator<Item = &'a str>) -> HostSet {
    rules.into_iter().map(str::to_owned).collect()
}

/// Inserts every member of `a ∩ b` into `target`. We walk the smaller of the
/// two sets and probe the larger, so the cost is `O(min(|a|, |b|))`.
pub fn insert_intersection(target: &mut HostSet, a: &HostSet, b: &HostSet) {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    for rule in small {
        if large.contains(rule) {
            target.insert(rule.clone());
        }
    }
}

/// Returns the members of `set` in lexicographic order, leaving out any rule
/// with fewer than `min_len` characters.
#[must_use]
pub fn sorted_rules(set: &HostSet, min_len: usize) -> Vec<&str> {
    let mut rules: Vec<&str> =
        set.iter().map(String::as_str).filter(|rule| rule.chars().count() >= min_len).collect();
    rules.sort_unstable();
    rules
}
