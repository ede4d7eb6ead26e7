use super::State;
use crate::character_sets::{is_scheme_char, is_scheme_start, is_slash};
use crate::helpers::{prune_fragment, split_at_byte, trim_query_leads};

/// Result of the scheme scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeParts<'a> {
    /// Scheme including its trailing `:`, when one was found
    pub scheme: &'a str,
    /// True when at least one `/` or `\` followed the scheme
    pub has_hostname: bool,
    pub rest: &'a str,
}

/// Scan the scheme prefix byte by byte.
///
/// Bytes are treated as raw code units, so a non-ASCII byte simply ends the
/// scheme. The byte right after the scheme characters is always consumed, but
/// it only becomes part of the scheme when it is `:`. The slash run after it
/// is skipped and counted, and the remainder drops `scheme.len() + slashes`
/// bytes from the front of the input.
pub fn parse_scheme(input: &str) -> SchemeParts<'_> {
    let bytes = input.as_bytes();
    let mut state = State::SchemeStart;
    let mut scheme_len = 0;
    let mut slashes = 0;
    let mut i = 0;

    while state != State::Done {
        let Some(&c) = bytes.get(i) else {
            break;
        };

        state = match state {
            State::SchemeStart if is_scheme_start(c) => {
                i += 1;
                scheme_len += 1;
                State::Scheme
            }
            State::Scheme if is_scheme_char(c) => {
                i += 1;
                scheme_len += 1;
                State::Scheme
            }
            State::Scheme => State::Colon,
            State::Colon => {
                i += 1;
                if c == b':' {
                    scheme_len += 1;
                }
                State::Slashes
            }
            State::Slashes if is_slash(c) => {
                i += 1;
                slashes += 1;
                State::Slashes
            }
            State::SchemeStart | State::Slashes | State::Done => State::Done,
        };
    }

    // Slashes only follow an ASCII byte, so both cuts land on char boundaries
    SchemeParts {
        scheme: &input[..scheme_len],
        has_hostname: slashes > 0,
        rest: input.get(scheme_len + slashes..).unwrap_or_default(),
    }
}

/// Split off the fragment.
/// Returns (`rest`, `fragment`) with the fragment keeping its `#`.
pub fn parse_fragment(input: &str) -> (&str, &str) {
    prune_fragment(input)
}

/// Split off the query at the first `?`.
/// Returns (`rest`, `parameters`) where `parameters` has its leading
/// `?`/`#`/`&` run removed, or None when there is no `?` at all.
pub fn parse_query(input: &str) -> (&str, Option<&str>) {
    match split_at_byte(input, b'?') {
        Some((rest, query)) => (rest, Some(trim_query_leads(&query[1..]))),
        None => (input, None),
    }
}

/// Split off the absolute path.
///
/// With a hostname the path starts at the first `/`; without one the whole
/// input is an opaque path (`mailto:`, `data:`, ...).
pub fn parse_path(input: &str, has_hostname: bool) -> (&str, &str) {
    if !has_hostname {
        return ("", input);
    }
    split_at_byte(input, b'/').unwrap_or((input, ""))
}

/// Split off user info before the first `@`.
/// Returns (`rest`, `user_info`); the `@` itself is dropped.
pub fn parse_user_info(input: &str) -> (&str, &str) {
    match split_at_byte(input, b'@') {
        Some((user, rest)) => (&rest[1..], user),
        None => (input, ""),
    }
}

/// Split off the host, leaving the port text as the remainder.
///
/// A leading `[` marks an IPv6 literal that runs through the first `]`; an
/// unterminated literal yields an empty host and leaves the input untouched.
/// Otherwise the host ends at the first `:`, which is dropped.
pub fn parse_host(input: &str) -> (&str, &str) {
    if input.starts_with('[') {
        return match memchr::memchr(b']', input.as_bytes()) {
            Some(end) => (&input[end + 1..], &input[..=end]),
            None => (input, ""),
        };
    }

    match split_at_byte(input, b':') {
        Some((host, rest)) => (&rest[1..], host),
        None => ("", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(input: &str) -> (&str, bool, &str) {
        let parts = parse_scheme(input);
        (parts.scheme, parts.has_hostname, parts.rest)
    }

    #[test]
    fn test_parse_scheme() {
        assert_eq!(scheme("http://example.com"), ("http:", true, "example.com"));
        assert_eq!(scheme("HTTP://fOo"), ("HTTP:", true, "fOo"));
        assert_eq!(scheme("svn+ssh://h"), ("svn+ssh:", true, "h"));
        assert_eq!(scheme("https:\\/github.com"), ("https:", true, "github.com"));
        assert_eq!(scheme("mailto:a@b"), ("mailto:", false, "a@b"));
        assert_eq!(scheme("//foo"), ("", false, "//foo"));
        assert_eq!(scheme("1http://x"), ("", false, "1http://x"));
        assert_eq!(scheme(""), ("", false, ""));
    }

    #[test]
    fn test_parse_scheme_without_colon() {
        // Scanning stops cleanly at end of input
        assert_eq!(scheme("example.com"), ("example.com", false, ""));
        assert_eq!(scheme("a"), ("a", false, ""));
        assert_eq!(scheme("ab:"), ("ab:", false, ""));

        // The byte after the scheme is consumed even when it is not a colon
        assert_eq!(scheme("foo/bar"), ("foo", false, "/bar"));
        assert_eq!(scheme("foo//bar"), ("foo", true, "/bar"));
    }

    #[test]
    fn test_parse_scheme_non_ascii() {
        assert_eq!(scheme("héllo:"), ("h", false, "éllo:"));
        assert_eq!(scheme("ab\u{e9}/"), ("ab", false, "\u{e9}/"));
        assert_eq!(scheme("\u{e9}://x"), ("", false, "\u{e9}://x"));
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("host/path?a=1&b"), ("host/path", Some("a=1&b")));
        assert_eq!(parse_query("p???&hl=en"), ("p", Some("hl=en")));
        assert_eq!(parse_query("p?"), ("p", Some("")));
        assert_eq!(parse_query("p?a?b"), ("p", Some("a?b")));
        assert_eq!(parse_query("host/path"), ("host/path", None));
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path("host/a/b", true), ("host", "/a/b"));
        assert_eq!(parse_path("host", true), ("host", ""));
        assert_eq!(parse_path("a@b/c", false), ("", "a@b/c"));
    }

    #[test]
    fn test_parse_user_info() {
        assert_eq!(parse_user_info("u:p@host"), ("host", "u:p"));
        assert_eq!(parse_user_info("a@b@host"), ("b@host", "a"));
        assert_eq!(parse_user_info("host"), ("host", ""));
    }

    #[test]
    fn test_parse_host() {
        assert_eq!(parse_host("example.com:80"), ("80", "example.com"));
        assert_eq!(parse_host("example.com"), ("", "example.com"));
        assert_eq!(parse_host("[::1]:8080"), (":8080", "[::1]"));
        assert_eq!(parse_host("[::1]"), ("", "[::1]"));
        assert_eq!(parse_host("[::1"), ("[::1", ""));
        assert_eq!(parse_host(""), ("", ""));
    }
}
