//! Static catalog of LLM providers and their model names.
//!
//! The catalog is compiled into the crate and never changes at runtime.
//!
//! # Architecture
//!
//! - `types`: Core types (Provider, ModelEntry, CatalogError)
//! - `data`: Per-provider model tables
//!
//! The lookup tables below are built once, on first use, and are read-only
//! afterwards.
//!
//! # Example
//!
//! ```
//! use llmrelic_core::catalog::{self, Provider};
//!
//! assert_eq!(catalog::lookup_provider("gpt-4"), Some(Provider::OpenAi));
//! assert!(catalog::list_models("openai").unwrap().contains(&"gpt-4"));
//! ```

mod data;
pub mod types;

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

pub use types::{CatalogError, ModelEntry, Provider};

/// Provider identifier -> provider.
static PROVIDERS: Lazy<BTreeMap<&'static str, Provider>> = Lazy::new(|| {
    Provider::all()
        .iter()
        .map(|provider| (provider.as_str(), *provider))
        .collect()
});

/// Model name -> owning provider.
static MODEL_INDEX: Lazy<HashMap<&'static str, Provider>> = Lazy::new(|| {
    Provider::all()
        .iter()
        .flat_map(|provider| {
            provider
                .entries()
                .iter()
                .map(move |entry| (entry.name, *provider))
        })
        .collect()
});

/// Returns the table of all known providers, keyed by identifier.
pub fn providers() -> &'static BTreeMap<&'static str, Provider> {
    &PROVIDERS
}

/// Look up a provider by its identifier.
///
/// Only the exact lowercase identifiers are accepted. `str::parse::<Provider>`
/// goes through here too.
pub fn provider(name: &str) -> Result<Provider, CatalogError> {
    PROVIDERS
        .get(name)
        .copied()
        .ok_or_else(|| CatalogError::UnknownProvider(name.to_string()))
}

/// All model names for a provider, in declaration order.
pub fn list_models(provider_name: &str) -> Result<Vec<&'static str>, CatalogError> {
    Ok(provider(provider_name)?.list_models())
}

/// Find which provider a model name belongs to.
///
/// Returns `None` for names that are not in the catalog.
pub fn lookup_provider(model_name: &str) -> Option<Provider> {
    MODEL_INDEX.get(model_name).copied()
}

/// Snapshot of the whole catalog, keyed by provider identifier.
pub fn all_models() -> BTreeMap<&'static str, Vec<&'static str>> {
    PROVIDERS
        .iter()
        .map(|(name, provider)| (*name, provider.list_models()))
        .collect()
}
