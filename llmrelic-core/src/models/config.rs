//! Declarative registry configuration.
//!
//! A `RegistryConfig` describes which models to support and is usually read
//! from a JSON document:
//!
//! ```json
//! {
//!   "providers": ["anthropic"],
//!   "subsets": { "openai": ["gpt-4", "gpt-4o"] },
//!   "custom": ["my-fine-tune"],
//!   "exclude": ["claude-instant-1.2"]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogError, Provider};

use super::builder::SupportedModels;
use super::registry::ModelRegistry;

/// Which models a registry should support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Providers whose whole catalog is supported.
    #[serde(default)]
    pub providers: Vec<String>,
    /// Provider -> the subset of its models to support.
    #[serde(default)]
    pub subsets: BTreeMap<String, Vec<String>>,
    /// Names added as-is, without catalog checks.
    #[serde(default)]
    pub custom: Vec<String>,
    /// Names removed after everything else is applied.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RegistryConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse registry config")
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry config {}", path.display()))?;
        let config = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            providers = config.providers.len(),
            subsets = config.subsets.len(),
            custom = config.custom.len(),
            "Loaded registry config"
        );
        Ok(config)
    }

    /// Translate the configuration into a builder.
    ///
    /// Applies providers, then subsets, then custom names, then exclusions.
    /// Fails on the first provider name that is not in the catalog.
    pub fn to_builder(&self) -> Result<SupportedModels, CatalogError> {
        let mut builder = SupportedModels::create();

        for name in &self.providers {
            let provider: Provider = name.parse()?;
            builder = builder.provider(provider, None);
        }

        for (name, models) in &self.subsets {
            let provider: Provider = name.parse()?;
            let only: Vec<&str> = models.iter().map(String::as_str).collect();
            builder = builder.provider(provider, Some(only.as_slice()));
        }

        Ok(builder.custom(self.custom.iter().cloned()).exclude(&self.exclude))
    }

    /// Build the registry this configuration describes.
    pub fn build(&self) -> Result<ModelRegistry, CatalogError> {
        Ok(self.to_builder()?.build())
    }
}
