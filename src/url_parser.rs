use crate::checkers::{is_blank, parse_port};
use crate::compat::{String, ToString};
use crate::helpers::{normalize_backslashes, split_key_value};
use crate::parsed_url::ParsedUrl;
use crate::parser::{
    SchemeParts, parse_fragment, parse_host, parse_path, parse_query, parse_scheme,
    parse_user_info,
};
use crate::query_store::QueryStore;

/// Lenient URL decomposer.
///
/// Owns the fields of the last parse and the store holding its query
/// parameters. Every call to [`UrlParser::parse`] overwrites both, so nothing
/// from an earlier input survives.
///
/// # Examples
///
/// ```
/// use lunar_url::UrlParser;
///
/// let mut parser = UrlParser::new();
/// parser.parse("https://google.com/?foo=bar");
///
/// assert_eq!(parser.scheme(), "https:");
/// assert_eq!(parser.host(), "google.com");
/// assert_eq!(parser.path_and_query(), "/?foo=bar");
/// assert_eq!(parser.query_store().count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlParser {
    url: ParsedUrl,
    store: QueryStore,
}

impl UrlParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing store for query parameters.
    /// Its contents are discarded on the first parse.
    pub fn with_store(store: QueryStore) -> Self {
        Self {
            url: ParsedUrl::default(),
            store,
        }
    }

    /// Decompose `input` into its parts.
    ///
    /// Never fails: every malformed or missing piece falls back to an empty
    /// field (or port 0). The passes run in a fixed order, each one cutting
    /// its part off the remainder left by the previous one: scheme, fragment,
    /// query, path, user info, host and finally port.
    pub fn parse(&mut self, input: &str) {
        let input = input.trim();

        let SchemeParts {
            scheme,
            has_hostname,
            rest,
        } = parse_scheme(input);
        let (rest, fragment) = parse_fragment(rest);
        let (rest, parameters) = parse_query(rest);
        self.fill_store(parameters);

        let rest = normalize_backslashes(rest);
        let (rest, path) = parse_path(&rest, has_hostname);
        let (rest, user) = parse_user_info(rest);
        let (rest, host) = parse_host(rest);

        self.url = ParsedUrl {
            scheme: scheme.to_string(),
            fragment: fragment.to_string(),
            query: parameters.unwrap_or_default().to_string(),
            path: path.to_string(),
            user: user.to_string(),
            host: host.to_lowercase(),
            port: parse_port(rest).unwrap_or(0),
            has_hostname,
        };

        tracing::trace!(
            scheme = self.url.scheme.as_str(),
            host = self.url.host.as_str(),
            port = self.url.port,
            parameters = self.store.count(),
            "parsed url"
        );
    }

    /// Re-initialize the store for this input and load its parameters.
    ///
    /// Capacity is the number of `&`-segments, blank ones included, so it is
    /// an upper bound on the distinct keys. Blank segments are skipped and
    /// repeated keys accumulate in segment order.
    fn fill_store(&mut self, parameters: Option<&str>) {
        let Some(parameters) = parameters else {
            self.store.initialize(0);
            return;
        };

        self.store.initialize(parameters.split('&').count());
        for segment in parameters.split('&').filter(|segment| !is_blank(segment)) {
            let (key, value) = split_key_value(segment);
            // One slot per segment, so a new key always finds room
            let _ = self.store.accumulate(key, value);
        }
    }

    pub fn scheme(&self) -> &str {
        &self.url.scheme
    }

    pub fn host(&self) -> &str {
        &self.url.host
    }

    pub fn absolute_path(&self) -> &str {
        &self.url.path
    }

    pub fn path_and_query(&self) -> String {
        self.url.path_and_query()
    }

    pub fn user_info(&self) -> &str {
        &self.url.user
    }

    pub fn port(&self) -> i32 {
        self.url.port
    }

    pub fn fragment(&self) -> &str {
        &self.url.fragment
    }

    /// Raw query string, leading delimiters removed
    pub fn query(&self) -> &str {
        &self.url.query
    }

    pub fn query_store(&self) -> &QueryStore {
        &self.store
    }

    pub fn has_hostname(&self) -> bool {
        self.url.has_hostname
    }

    pub fn parsed(&self) -> &ParsedUrl {
        &self.url
    }

    pub fn into_parts(self) -> (ParsedUrl, QueryStore) {
        (self.url, self.store)
    }

    pub fn into_store(self) -> QueryStore {
        self.store
    }
}

/// Parse once without keeping a parser around.
///
/// # Examples
///
/// ```
/// let (url, params) = lunar_url::parse("mailto:test@example.com");
/// assert_eq!(url.scheme, "mailto:");
/// assert_eq!(url.path, "test@example.com");
/// assert!(params.is_empty());
/// ```
pub fn parse(input: &str) -> (ParsedUrl, QueryStore) {
    let mut parser = UrlParser::new();
    parser.parse(input);
    parser.into_parts()
}
