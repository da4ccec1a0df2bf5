//! Fluent builder for assembling a [`ModelRegistry`].

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Provider;

use super::registry::ModelRegistry;

/// Accumulates a set of model names from providers and custom entries,
/// then materializes it as a [`ModelRegistry`].
///
/// ```
/// use llmrelic_core::SupportedModels;
///
/// let registry = SupportedModels::create()
///     .openai(Some(&["gpt-4"]))
///     .anthropic(Some(&["claude-2.1"]))
///     .custom(["my-fine-tune"])
///     .build();
///
/// assert!(registry.is_supported("gpt-4"));
/// assert!(registry.is_supported("my-fine-tune"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SupportedModels {
    models: HashSet<String>,
}

impl SupportedModels {
    /// Create an empty builder.
    pub fn create() -> Self {
        Self::default()
    }

    /// Add models from a provider's catalog.
    ///
    /// With no filter every model of the provider is added. With a filter only
    /// the names the provider actually lists are added; anything else is
    /// dropped.
    pub fn provider(mut self, provider: Provider, only: Option<&[&str]>) -> Self {
        match only {
            None => self.models.extend(provider.list_models().into_iter().map(String::from)),
            Some(names) => {
                let (known, unknown): (Vec<&str>, Vec<&str>) =
                    names.iter().partition(|name| provider.contains(name));
                if !unknown.is_empty() {
                    debug!(
                        provider = %provider,
                        dropped = ?unknown,
                        "Ignoring names that are not models of this provider"
                    );
                }
                self.models.extend(known.into_iter().map(String::from));
            }
        }
        self
    }

    /// Add OpenAI models; see [`Self::provider`].
    pub fn openai(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::OpenAi, only)
    }

    /// Add Anthropic models; see [`Self::provider`].
    pub fn anthropic(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Anthropic, only)
    }

    /// Add Google models; see [`Self::provider`].
    pub fn google(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Google, only)
    }

    /// Add Cohere models; see [`Self::provider`].
    pub fn cohere(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Cohere, only)
    }

    /// Add Mistral models; see [`Self::provider`].
    pub fn mistral(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Mistral, only)
    }

    /// Add Meta models; see [`Self::provider`].
    pub fn meta(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Meta, only)
    }

    /// Add Huggingface models; see [`Self::provider`].
    pub fn huggingface(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Huggingface, only)
    }

    /// Add Moonshot models; see [`Self::provider`].
    pub fn moonshot(self, only: Option<&[&str]>) -> Self {
        self.provider(Provider::Moonshot, only)
    }

    /// Add arbitrary model names without checking the catalog.
    pub fn custom<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.extend(names.into_iter().map(Into::into));
        self
    }

    /// Drop names from the working set.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.models.remove(name.as_ref());
        }
        self
    }

    /// Current working set, sorted.
    pub fn get_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.models.iter().cloned().collect();
        models.sort();
        models
    }

    /// Build the registry.
    pub fn build(self) -> ModelRegistry {
        debug!(count = self.models.len(), "Building model registry");
        let mut registry = ModelRegistry::new();
        registry.add_models(self.models);
        registry
    }
}
