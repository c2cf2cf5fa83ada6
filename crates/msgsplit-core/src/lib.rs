//! # msgsplit-core
//!
//! Configuration, platform limits, and error handling shared by the msgsplit crates.

pub mod config;
pub mod error;
