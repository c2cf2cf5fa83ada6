//! Triple-backtick fence scanning.
//!
//! Fences are counted as raw, non-overlapping "```" triples. Language tags
//! and fence lines are not interpreted.

const FENCE: &[u8] = b"```";

/// Byte offset of the opening fence of the last unclosed code block in `text`.
///
/// Returns `None` when every fence is matched (an even number of triples).
pub fn find_last_unclosed_code_block(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut count = 0usize;
    let mut open_idx = None;
    let mut i = 0;

    while i + FENCE.len() <= bytes.len() {
        if &bytes[i..i + FENCE.len()] == FENCE {
            if count % 2 == 0 {
                open_idx = Some(i);
            }
            count += 1;
            i += FENCE.len();
        } else {
            i += 1;
        }
    }

    if count % 2 == 1 {
        open_idx
    } else {
        None
    }
}

/// Byte offset just past the first fence at or after `start`.
pub fn find_next_closing_code_block(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if start >= bytes.len() {
        return None;
    }
    bytes[start..]
        .windows(FENCE.len())
        .position(|w| w == FENCE)
        .map(|pos| start + pos + FENCE.len())
}
