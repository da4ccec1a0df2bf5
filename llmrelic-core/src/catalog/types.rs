//! Core catalog type definitions.
//!
//! This module defines the closed set of providers, the shape of a catalog
//! entry, and the errors raised by catalog lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::data;

// ============================================================================
// Errors
// ============================================================================

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
    #[error("{provider} has no model key {key}")]
    UnknownModelKey { provider: Provider, key: String },
}

// ============================================================================
// Catalog Entry
// ============================================================================

/// A single model in a provider's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelEntry {
    /// Symbolic constant name (e.g. `GPT_4`).
    pub key: &'static str,
    /// Model name as sent to the provider API (e.g. `gpt-4`).
    pub name: &'static str,
}

impl ModelEntry {
    pub const fn new(key: &'static str, name: &'static str) -> Self {
        Self { key, name }
    }
}

// ============================================================================
// Providers
// ============================================================================

/// Known model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Google,
    Cohere,
    Mistral,
    Meta,
    Huggingface,
    Moonshot,
}

impl Provider {
    /// Returns all providers in catalog order.
    pub fn all() -> &'static [Provider] {
        &[
            Self::OpenAi,
            Self::Anthropic,
            Self::Google,
            Self::Cohere,
            Self::Mistral,
            Self::Meta,
            Self::Huggingface,
            Self::Moonshot,
        ]
    }

    /// Returns the lowercase identifier used as the provider's table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Cohere => "cohere",
            Self::Mistral => "mistral",
            Self::Meta => "meta",
            Self::Huggingface => "huggingface",
            Self::Moonshot => "moonshot",
        }
    }

    /// Returns the human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Google => "Google",
            Self::Cohere => "Cohere",
            Self::Mistral => "Mistral",
            Self::Meta => "Meta",
            Self::Huggingface => "Huggingface",
            Self::Moonshot => "Moonshot",
        }
    }

    /// Catalog entries for this provider, in declaration order.
    pub fn entries(&self) -> &'static [ModelEntry] {
        data::entries(*self)
    }

    /// All model names for this provider, in declaration order.
    pub fn list_models(&self) -> Vec<&'static str> {
        self.entries().iter().map(|entry| entry.name).collect()
    }

    /// Check whether `name` is a model of this provider.
    pub fn contains(&self, name: &str) -> bool {
        self.entries().iter().any(|entry| entry.name == name)
    }

    /// Resolve a symbolic key (e.g. `GPT_4`) to its model name.
    ///
    /// Fails with [`CatalogError::UnknownModelKey`] when the key is not
    /// declared for this provider.
    pub fn model(&self, key: &str) -> Result<&'static str, CatalogError> {
        self.entries()
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.name)
            .ok_or_else(|| CatalogError::UnknownModelKey {
                provider: *self,
                key: key.to_string(),
            })
    }

    /// Resolve a symbolic key, falling back to the input itself.
    ///
    /// Unlike [`Provider::model`] this never fails: an unknown key is assumed
    /// to already be a model name and is returned unchanged.
    pub fn get_model<'a>(&self, key: &'a str) -> &'a str {
        self.model(key).unwrap_or(key)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Provider {
    type Err = CatalogError;

    /// Parse a provider identifier. Accepts exactly the keys of
    /// [`catalog::providers`](super::providers).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::provider(s)
    }
}
