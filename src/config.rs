use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::backend::{Backend, Linked};

/// Settings for the platform logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Overrides the linked backend's log tag.
    pub tag: Option<String>,
    pub max_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tag: None,
            max_level: LevelFilter::Info,
        }
    }
}

impl LoggingConfig {
    /// Parses a config such as `{"tag": "app", "max_level": "warn"}`.
    /// Missing fields take their defaults. Anything but a JSON object is
    /// rejected.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("invalid logging config")?;
        anyhow::ensure!(
            value.is_object(),
            "invalid logging config: expected a JSON object"
        );
        serde_json::from_value(value).context("invalid logging config")
    }

    pub fn tag(&self) -> &str {
        self.tag
            .as_deref()
            .unwrap_or_else(|| Linked::default().log_tag())
    }
}
