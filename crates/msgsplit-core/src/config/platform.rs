//! Message size limits of the chat platforms chunks are usually sent to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A messaging platform with a known per-message size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Telegram,
    WhatsApp,
    Discord,
    Slack,
}

impl Platform {
    /// Maximum message length accepted by the platform.
    pub fn max_len(self) -> usize {
        match self {
            Platform::Telegram => 4096,
            Platform::WhatsApp => 4096,
            Platform::Discord => 2000,
            Platform::Slack => 4000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::WhatsApp => "whatsapp",
            Platform::Discord => "discord",
            Platform::Slack => "slack",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "telegram" => Ok(Platform::Telegram),
            "whatsapp" => Ok(Platform::WhatsApp),
            "discord" => Ok(Platform::Discord),
            "slack" => Ok(Platform::Slack),
            other => Err(format!(
                "unknown platform '{other}' (expected telegram, whatsapp, discord or slack)"
            )),
        }
    }
}
