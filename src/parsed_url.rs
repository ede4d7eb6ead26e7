use crate::compat::String;

/// Fields produced by one decomposition.
///
/// `Default` is the state every parse starts from: empty strings, port 0,
/// no hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme with its trailing `:` when present (`"http:"`)
    pub scheme: String,
    /// Fragment with its leading `#` when present
    pub fragment: String,
    /// Raw query without the leading `?`, not decoded
    pub query: String,
    pub path: String,
    /// User info without the trailing `@`
    pub user: String,
    /// Lower-cased host, brackets kept for IPv6 literals
    pub host: String,
    /// 0 when absent or unparsable
    pub port: i32,
    /// Set once a scheme was followed by `/` or `\`; switches path splitting on
    pub has_hostname: bool,
}

impl ParsedUrl {
    /// `path` alone when there is no query, otherwise `path?query`
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let mut result = String::with_capacity(self.path.len() + 1 + self.query.len());
        result.push_str(&self.path);
        result.push('?');
        result.push_str(&self.query);
        result
    }
}

impl core::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.scheme)?;
        if self.has_hostname {
            f.write_str("//")?;
        }
        if !self.user.is_empty() {
            write!(f, "{}@", self.user)?;
        }
        f.write_str(&self.host)?;
        if self.port != 0 {
            write!(f, ":{}", self.port)?;
        }
        write!(f, "{}{}", self.path_and_query(), self.fragment)
    }
}
