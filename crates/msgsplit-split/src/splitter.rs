//! The chunking loop.

use msgsplit_core::config::SplitConfig;
use msgsplit_core::error::SplitError;
use tracing::debug;

use crate::boundary::{find_last_newline, find_last_space, floor_char_boundary, hard_cut};
use crate::fence::{find_last_unclosed_code_block, find_next_closing_code_block};

/// Splits text into chunks bounded by a validated [`SplitConfig`].
///
/// Chunks borrow from the input. Each one is at most `limit` bytes, except a
/// chunk stretched up to `limit + fence_buffer` to reach the closing fence of
/// a code block, or the final remainder once it fits in that allowance. A
/// code block that does not close within the allowance is cut at `limit`.
///
/// Cuts never split a character, so when `limit` is smaller than the next
/// character that chunk holds the whole character (up to 4 bytes) and can
/// exceed `limit + fence_buffer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Build a splitter, rejecting a zero limit.
    pub fn new(config: SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split `text` into ordered, non-blank chunks.
    ///
    /// Whitespace at each cut is dropped, so blank input yields no chunks.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let limit = self.config.limit;
        let mut chunks = Vec::new();
        let mut content = text;

        while !content.is_empty() {
            if content.len() <= limit {
                push_chunk(&mut chunks, content);
                break;
            }

            let head = &content[..floor_char_boundary(content, limit)];
            let mut end = self.natural_break(head).unwrap_or(head.len());

            if let Some(open) = find_last_unclosed_code_block(&content[..end]) {
                end = self.fence_guard(content, end, open);
            }

            if end == 0 {
                end = hard_cut(content, limit);
            }

            push_chunk(&mut chunks, &content[..end]);
            content = content[end..].trim();
        }

        chunks
    }

    /// Last newline, else last space or tab, near the end of `s`.
    ///
    /// A break at offset 0 would produce an empty chunk and does not count.
    fn natural_break(&self, s: &str) -> Option<usize> {
        find_last_newline(s, self.config.newline_window)
            .filter(|&i| i > 0)
            .or_else(|| find_last_space(s, self.config.space_window))
            .filter(|&i| i > 0)
    }

    /// Move a cut that would leave the fence at `open` unclosed.
    fn fence_guard(&self, content: &str, end: usize, open: usize) -> usize {
        let extended = self.config.limit.saturating_add(self.config.fence_buffer);
        if content.len() <= extended {
            debug!(
                "split: remaining {} bytes fit the fence allowance, keeping code block whole",
                content.len()
            );
            return content.len();
        }

        match find_next_closing_code_block(content, end) {
            Some(close) if close <= extended => {
                debug!("split: extending chunk from {end} to closing fence at {close}");
                close
            }
            _ => {
                let before = self.natural_break(&content[..open]).unwrap_or(open);
                debug!("split: no closing fence within {extended} bytes, cutting at {before}");
                before
            }
        }
    }
}

fn push_chunk<'a>(chunks: &mut Vec<&'a str>, chunk: &'a str) {
    if !chunk.trim().is_empty() {
        chunks.push(chunk);
    }
}

/// Split a long message into chunks of at most `limit` bytes, using the
/// default boundary windows and fence allowance.
pub fn split_message(text: &str, limit: usize) -> Result<Vec<&str>, SplitError> {
    Ok(Splitter::new(SplitConfig::with_limit(limit))?.split(text))
}
