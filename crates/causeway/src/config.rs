//! Configuration for the causeway CLI.
//!
//! Configuration is optional: every field has a default, and the file is
//! only read when the user passes `--config`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::error::{Error, Result};
use crate::session;

/// When to emit ANSI colors in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Configuration file structure for causeway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CausewayConfig {
    /// Session prompt override.
    #[serde(default)]
    pub prompt: Option<String>,

    /// Color behavior for text output.
    #[serde(default)]
    pub color: ColorMode,
}

impl CausewayConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// The prompt to use for interactive sessions.
    #[must_use]
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(session::DEFAULT_PROMPT)
    }

    /// Apply the configured color behavior process-wide.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}
