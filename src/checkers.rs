/// Parse a port string leniently.
/// A single leading `:` is dropped, surrounding whitespace is ignored and an
/// optional sign is accepted. Returns None when nothing numeric remains or the
/// value does not fit in an `i32`.
pub fn parse_port(port: &str) -> Option<i32> {
    let port = port.strip_prefix(':').unwrap_or(port).trim();
    port.parse::<i32>().ok()
}

/// Check if a query segment carries nothing but whitespace
pub fn is_blank(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}
