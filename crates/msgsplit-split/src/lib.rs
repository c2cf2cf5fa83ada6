//! # msgsplit-split
//!
//! Splits oversized messages into chunks that fit a transport's size limit.
//!
//! Cuts prefer newlines, then spaces, and avoid landing inside a fenced
//! (```) code block whenever the block can be kept whole.

pub mod boundary;
pub mod fence;
pub mod splitter;


pub use msgsplit_core::config::SplitConfig;
pub use msgsplit_core::error::SplitError;
pub use splitter::{split_message, Splitter};
