use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Minimal view of a compose manifest: just enough to count services
#[derive(Debug, Deserialize)]
pub struct ComposeManifest {
    #[serde(default)]
    services: BTreeMap<String, serde_yaml::Value>,
}

impl ComposeManifest {
    /// Load a compose manifest from a path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read compose file at {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse compose file at {}", path.display()))
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}
