/// Scheme scanner states
/// Each state consumes at most one byte before handing over to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// First byte must be ASCII alpha
    SchemeStart,
    /// Alphanumerics, `+`, `-` and `.`
    Scheme,
    /// One byte is consumed here; it is kept only if it is `:`
    Colon,
    /// Run of `/` or `\` after the colon, counted but not kept
    Slashes,
    /// Scan finished
    Done,
}
