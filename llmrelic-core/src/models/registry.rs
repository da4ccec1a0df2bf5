//! Registry of model names the application currently supports.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::catalog::{self, CatalogError, Provider};

/// Set of supported model names.
///
/// Names are not validated against the catalog, so models the catalog does
/// not know yet can still be supported. Every read returns names sorted
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    models: HashSet<String>,
}

impl ModelRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model name. Adding a name twice has no further effect.
    pub fn add_model(&mut self, name: impl Into<String>) {
        self.models.insert(name.into());
    }

    /// Add several model names.
    pub fn add_models<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.extend(names.into_iter().map(Into::into));
    }

    /// Add every catalog model of a provider.
    ///
    /// Fails without touching the registry if the provider is unknown.
    pub fn add_provider(&mut self, provider_name: &str) -> Result<(), CatalogError> {
        let models = catalog::list_models(provider_name)?;
        debug!(
            provider = %provider_name,
            count = models.len(),
            "Adding provider models to registry"
        );
        self.add_models(models);
        Ok(())
    }

    /// Add every catalog model of each provider, in order.
    ///
    /// Stops at the first unknown provider. Providers added before it stay
    /// in the registry.
    pub fn add_providers<I, S>(&mut self, provider_names: I) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in provider_names {
            self.add_provider(name.as_ref())?;
        }
        Ok(())
    }

    /// Remove a model name. Returns whether it was present.
    pub fn remove_model(&mut self, name: &str) -> bool {
        self.models.remove(name)
    }

    /// Check if a model is supported.
    pub fn is_supported(&self, name: &str) -> bool {
        self.contains(name)
    }

    /// Check if a model is in the registry.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains(name)
    }

    /// Get all supported model names, sorted.
    pub fn get_supported_models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.models.iter().cloned().collect();
        models.sort();
        models
    }

    /// Group supported models by catalog provider.
    ///
    /// Names the catalog cannot attribute to a provider are left out of the
    /// result. Providers with no supported models do not appear.
    pub fn get_supported_by_provider(&self) -> BTreeMap<Provider, Vec<String>> {
        let mut grouped: BTreeMap<Provider, Vec<String>> = BTreeMap::new();
        for name in &self.models {
            if let Some(provider) = catalog::lookup_provider(name) {
                grouped.entry(provider).or_default().push(name.clone());
            }
        }
        for models in grouped.values_mut() {
            models.sort();
        }
        grouped
    }

    /// Remove all models.
    pub fn clear(&mut self) {
        self.models.clear();
    }

    /// Iterate over the supported models in sorted order.
    ///
    /// Each call reads the current contents.
    pub fn iter(&self) -> std::vec::IntoIter<&str> {
        let mut names: Vec<&str> = self.models.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.into_iter()
    }

    /// Number of supported models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModelRegistry {
    type Item = &'a str;
    type IntoIter = std::vec::IntoIter<&'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for ModelRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_models(iter);
    }
}

impl<S: Into<String>> FromIterator<S> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.add_models(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get_supported_models().is_empty());
    }

    #[test]
    fn test_add_and_check_model() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");

        assert!(registry.contains("gpt-4"));
        assert!(registry.is_supported("gpt-4"));
        assert!(!registry.is_supported("gpt-5"));
    }

    #[test]
    fn test_add_model_is_idempotent() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");
        registry.add_model("gpt-4");
        registry.add_models(["gpt-4", "gpt-4"]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get_supported_models(), vec!["gpt-4"]);
    }

    #[test]
    fn test_add_multiple_models() {
        let mut registry = ModelRegistry::new();
        registry.add_models(vec!["gpt-4".to_string(), "gpt-3.5-turbo".to_string()]);

        assert!(registry.contains("gpt-4"));
        assert!(registry.contains("gpt-3.5-turbo"));
    }

    #[test]
    fn test_add_model_accepts_uncataloged_names() {
        let mut registry = ModelRegistry::new();
        registry.add_model("my-fine-tune");
        assert!(registry.is_supported("my-fine-tune"));
    }

    #[test]
    fn test_get_models_sorted() {
        let mut registry = ModelRegistry::new();
        registry.add_models(["z-model", "a-model"]);

        assert_eq!(registry.get_supported_models(), vec!["a-model", "z-model"]);
    }

    #[test]
    fn test_sorted_without_duplicates_regardless_of_order() {
        let mut registry = ModelRegistry::new();
        registry.add_models(["m", "b", "z"]);
        registry.add_model("b");
        registry.add_models(["a", "z", "m"]);

        assert_eq!(registry.get_supported_models(), vec!["a", "b", "m", "z"]);
    }

    #[test]
    fn test_provider_adds_all_models() {
        let mut registry = ModelRegistry::new();
        registry.add_provider("openai").unwrap();

        let mut expected: Vec<String> = Provider::OpenAi
            .list_models()
            .into_iter()
            .map(String::from)
            .collect();
        expected.sort();
        assert_eq!(registry.get_supported_models(), expected);
    }

    #[test]
    fn test_add_unknown_provider_leaves_registry_untouched() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");

        let err = registry.add_provider("azure").unwrap_err();
        assert_eq!(err, CatalogError::UnknownProvider("azure".to_string()));
        assert_eq!(registry.get_supported_models(), vec!["gpt-4"]);
    }

    #[test]
    fn test_add_providers() {
        let mut registry = ModelRegistry::new();
        registry.add_providers(["openai", "anthropic"]).unwrap();

        for provider in [Provider::OpenAi, Provider::Anthropic] {
            for model in provider.list_models() {
                assert!(registry.contains(model));
            }
        }
    }

    #[test]
    fn test_add_providers_stops_at_first_unknown() {
        let mut registry = ModelRegistry::new();
        let err = registry
            .add_providers(["openai", "azure", "anthropic"])
            .unwrap_err();

        assert_eq!(err, CatalogError::UnknownProvider("azure".to_string()));
        assert!(registry.contains("gpt-4"));
        assert!(!registry.contains("claude-2.1"));
    }

    #[test]
    fn test_remove_model() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");

        assert!(registry.remove_model("gpt-4"));
        assert!(!registry.contains("gpt-4"));
    }

    #[test]
    fn test_remove_absent_model_is_noop() {
        let mut registry = ModelRegistry::new();
        registry.add_models(["a-model", "b-model"]);
        let before = registry.clone();

        assert!(!registry.remove_model("missing"));
        assert!(!registry.remove_model("missing"));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_get_supported_by_provider() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");

        let grouped = registry.get_supported_by_provider();
        assert_eq!(grouped.get(&Provider::OpenAi), Some(&vec!["gpt-4".to_string()]));
        assert!(grouped
            .iter()
            .filter(|(provider, _)| **provider != Provider::OpenAi)
            .all(|(_, models)| !models.contains(&"gpt-4".to_string())));
    }

    #[test]
    fn test_get_supported_by_provider_partitions() {
        let mut registry = ModelRegistry::new();
        registry.add_models([
            "gpt-4o",
            "gpt-4",
            "claude-2.1",
            "command",
            "my-fine-tune",
        ]);

        let grouped = registry.get_supported_by_provider();
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[&Provider::OpenAi], vec!["gpt-4", "gpt-4o"]);
        assert_eq!(grouped[&Provider::Anthropic], vec!["claude-2.1"]);
        assert_eq!(grouped[&Provider::Cohere], vec!["command"]);

        // uncataloged names are omitted, everything else appears exactly once
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, registry.len() - 1);
        assert!(grouped
            .values()
            .all(|models| !models.contains(&"my-fine-tune".to_string())));
    }

    #[test]
    fn test_clear_registry() {
        let mut registry = ModelRegistry::new();
        registry.add_model("gpt-4");
        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.get_supported_models(), Vec::<String>::new());
    }

    #[test]
    fn test_iter_returns_sorted_models() {
        let mut registry = ModelRegistry::new();
        registry.add_models(["b", "a"]);

        let models: Vec<&str> = registry.iter().collect();
        assert_eq!(models, vec!["a", "b"]);
    }

    #[test]
    fn test_iter_reads_current_state() {
        let mut registry = ModelRegistry::new();
        registry.add_model("b");
        assert_eq!(registry.iter().count(), 1);

        registry.add_model("a");
        let models: Vec<&str> = (&registry).into_iter().collect();
        assert_eq!(models, vec!["a", "b"]);

        let mut seen = Vec::new();
        for name in &registry {
            seen.push(name.to_string());
        }
        assert_eq!(seen, registry.get_supported_models());
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut registry: ModelRegistry = ["z", "a"].into_iter().collect();
        registry.extend(vec!["m".to_string()]);

        assert_eq!(registry.get_supported_models(), vec!["a", "m", "z"]);
    }
}
