//! Natural break points and UTF-8 safe hard cuts.

/// Position of the last `\n` within the trailing `window` bytes of `s`.
pub fn find_last_newline(s: &str, window: usize) -> Option<usize> {
    rfind_in_window(s, window, |b| b == b'\n')
}

/// Position of the last space or tab within the trailing `window` bytes of `s`.
pub fn find_last_space(s: &str, window: usize) -> Option<usize> {
    rfind_in_window(s, window, |b| b == b' ' || b == b'\t')
}

fn rfind_in_window(s: &str, window: usize, pred: impl Fn(u8) -> bool) -> Option<usize> {
    let bytes = s.as_bytes();
    let start = bytes.len().saturating_sub(window);
    bytes[start..]
        .iter()
        .rposition(|&b| pred(b))
        .map(|i| start + i)
}

/// Largest char boundary in `s` that is `<= idx`.
pub fn floor_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Byte offset for a cut at `limit` that never splits a character.
///
/// Falls forward to the end of the first character when `limit` is smaller
/// than it, so the result is always positive for non-empty `s`.
pub fn hard_cut(s: &str, limit: usize) -> usize {
    let end = floor_char_boundary(s, limit);
    if end > 0 {
        return end;
    }
    s.chars().next().map_or(0, char::len_utf8)
}
