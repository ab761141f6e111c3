/// Pipeline Configuration
///
/// Loaded from a TOML file; individual fields can be overridden by CLI
/// flags. The traversal order stays a string here so a typo surfaces as
/// `InvalidOrder` at parse time, the same error path the server uses.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::error::TreeError;
use crate::domain::tree::TraversalOrder;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Traversal order: "DFS" or "BFS" (case-insensitive).
    #[serde(default = "default_order")]
    pub order: String,
    /// Number of rows in every encoded sample.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Worker threads for batch encoding. Defaults to half the cores.
    #[serde(default)]
    pub workers: Option<usize>,
}

fn default_order() -> String {
    "DFS".to_string()
}

fn default_max_length() -> usize {
    100
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            max_length: default_max_length(),
            workers: None,
        }
    }
}

impl EncodeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn traversal_order(&self) -> Result<TraversalOrder, TreeError> {
        TraversalOrder::parse(&self.order)
    }
}
