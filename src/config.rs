//! Controller configuration
//!
//! Configuration for [`crate::PageController`], loadable from YAML or JSON
//! the same way hosts load the rest of their settings.

use crate::error::{Error, Result};
use crate::types::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a pagination controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Page size used at construction and as the fallback for malformed
    /// widget size events
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Page-size choices offered to the widget
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,

    /// Initial externally reported item count
    #[serde(default)]
    pub total_items: u64,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<u32> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            total_items: 0,
        }
    }
}

impl ControllerConfig {
    /// Create a config with the given default page size and the standard
    /// option set
    pub fn new(default_page_size: u32) -> Self {
        Self {
            default_page_size,
            ..Self::default()
        }
    }

    /// Set the initial total item count
    #[must_use]
    pub fn with_total_items(mut self, total_items: u64) -> Self {
        self.total_items = total_items;
        self
    }

    /// Set the page-size options
    #[must_use]
    pub fn with_page_size_options(mut self, options: impl Into<Vec<u32>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size_options.is_empty() {
            return Err(Error::config("page_size_options must not be empty"));
        }
        if self.page_size_options.iter().any(|&s| s == 0) {
            return Err(Error::config("page size options must be positive"));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(Error::page_size_not_allowed(
                self.default_page_size,
                &self.page_size_options,
            ));
        }
        Ok(())
    }

    /// Parse a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.to_string_lossy()));
        }
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }
}
