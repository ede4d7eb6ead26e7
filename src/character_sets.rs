/// Scheme character classification
/// Returns: 0=not a scheme char, 1=alpha (may start a scheme), 2=continuation only
const SCHEME_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = 1;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = 1;
        i += 1;
    }

    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = 2;
        i += 1;
    }
    table[b'+' as usize] = 2;
    table[b'-' as usize] = 2;
    table[b'.' as usize] = 2;

    table
};

/// Check if a byte may open a scheme (`/[a-z]/i`)
pub fn is_scheme_start(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] == 1
}

/// Check if a byte may continue a scheme (`/[a-z0-9+.-]/i`)
pub fn is_scheme_char(b: u8) -> bool {
    SCHEME_CHAR_TABLE[b as usize] != 0
}

/// Separators skipped after `scheme:`; both slash directions are tolerated.
pub fn is_slash(b: u8) -> bool {
    matches!(b, b'/' | b'\\')
}

/// Delimiters stripped from the front of a query block
pub fn is_query_lead(b: u8) -> bool {
    matches!(b, b'?' | b'#' | b'&')
}
