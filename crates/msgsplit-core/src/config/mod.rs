mod defaults;
mod platform;

#[cfg(test)]
mod tests;

pub use platform::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SplitError;
use defaults::*;

/// Top-level msgsplit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target platform. When set, its message limit replaces `split.limit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Chunking policy.
///
/// All sizes are in UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Maximum chunk size. Must be greater than zero.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// How far back from a cut to look for a newline.
    #[serde(default = "default_newline_window")]
    pub newline_window: usize,
    /// How far back from a cut to look for a space or tab.
    #[serde(default = "default_space_window")]
    pub space_window: usize,
    /// Extra room a chunk may take to reach the closing fence of a code block.
    #[serde(default = "default_fence_buffer")]
    pub fence_buffer: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            newline_window: default_newline_window(),
            space_window: default_space_window(),
            fence_buffer: default_fence_buffer(),
        }
    }
}

impl SplitConfig {
    /// Default policy with a different limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Reject settings the splitter cannot make progress with.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.limit == 0 {
            return Err(SplitError::ZeroLimit);
        }
        Ok(())
    }
}

impl Config {
    /// The chunk limit after applying the platform preset, if any.
    pub fn effective_limit(&self) -> usize {
        self.platform
            .map(Platform::max_len)
            .unwrap_or(self.split.limit)
    }

    /// The split policy with the effective limit applied.
    pub fn effective_split(&self) -> SplitConfig {
        SplitConfig {
            limit: self.effective_limit(),
            ..self.split
        }
    }
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: defaults are returned.
pub fn load(path: &str) -> Result<Config, SplitError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SplitError::Config(format!("failed to parse config: {}", e)))?;

    config.split.validate()?;
    Ok(config)
}
