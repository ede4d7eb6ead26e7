use crate::character_sets::is_query_lead;
use crate::compat::{Cow, String};

/// Split at the first occurrence of `needle`.
/// Returns (`before`, `from_needle`) where `from_needle` still starts with the needle.
pub fn split_at_byte(input: &str, needle: u8) -> Option<(&str, &str)> {
    memchr::memchr(needle, input.as_bytes()).map(|pos| input.split_at(pos))
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_with_hash`)
/// The fragment keeps its leading '#', empty when there is none.
pub fn prune_fragment(input: &str) -> (&str, &str) {
    split_at_byte(input, b'#').unwrap_or((input, ""))
}

/// Drop every leading `?`, `#` or `&`, in any mix.
pub fn trim_query_leads(input: &str) -> &str {
    let skip = input
        .bytes()
        .position(|b| !is_query_lead(b))
        .unwrap_or(input.len());
    &input[skip..]
}

/// Replace every backslash with a forward slash.
/// Returns a Cow to avoid allocation when there is nothing to replace.
pub fn normalize_backslashes(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\\', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace('\\', "/"))
}

/// Split one query segment into key and value at the first `=`.
/// `+` in the value becomes a space; a segment without `=` has an empty value.
pub fn split_key_value(segment: &str) -> (&str, String) {
    match segment.split_once('=') {
        Some((key, value)) => (key, value.replace('+', " ")),
        None => (segment, String::new()),
    }
}
