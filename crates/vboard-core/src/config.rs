#![forbid(unsafe_code)]

//! Board configuration as data.
//!
//! [`BoardConfig`] groups every tunable used by the workspace and the window
//! layer so it can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! [window]
//! row_height = 80
//! viewport_height = 500
//! overscan = 2
//! grid = 8
//!
//! [ids]
//! prefix = "item-"
//!
//! [transfer]
//! policy = "copy"
//! ```
//!
//! Missing sections and fields fall back to [`Default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{DEFAULT_ID_PREFIX, IdGenerator};
use crate::reorder::TransferPolicy;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub window: WindowSettings,
    pub ids: IdSettings,
    pub transfer: TransferSettings,
}

/// Fixed-size row windowing parameters, in pixels (or cells for a TUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub row_height: u32,
    pub viewport_height: u32,
    /// Extra rows rendered on each side of the visible range.
    pub overscan: usize,
    /// Gutter between rows when not dragging.
    pub grid: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            row_height: 80,
            viewport_height: 500,
            overscan: 2,
            grid: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdSettings {
    pub prefix: String,
    /// First counter value handed out.
    pub start: u64,
}

impl Default for IdSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ID_PREFIX.to_owned(),
            start: 0,
        }
    }
}

impl IdSettings {
    #[must_use]
    pub fn generator(&self) -> IdGenerator {
        IdGenerator::seeded(self.prefix.clone(), self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
    pub policy: TransferPolicy,
}

/// Errors that can occur when loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl BoardConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a file, choosing the format by extension (`.json`, else TOML),
    /// and reject invalid values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        tracing::debug!(
            message = "config.loaded",
            path = %path.display(),
            row_height = config.window.row_height,
            viewport_height = config.window.viewport_height
        );
        Ok(config)
    }

    /// Returns a list of problems. Empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.window.row_height == 0 {
            errors.push("window.row_height must be > 0".to_owned());
        }
        if self.window.grid.saturating_mul(2) >= self.window.row_height {
            errors.push("window.grid must be less than half of window.row_height".to_owned());
        }
        if self.ids.prefix.is_empty() {
            errors.push("ids.prefix must not be empty".to_owned());
        }
        if self.ids.start == u64::MAX {
            errors.push("ids.start must be below u64::MAX".to_owned());
        }
        errors
    }
}
