//! llmrelic Core Library
//!
//! A static catalog of LLM provider and model identifiers, plus a registry
//! that tracks which model names an application supports. It includes:
//!
//! - Catalog of providers and their model names, with reverse lookup
//! - Model registry with provider-aware grouping
//! - Fluent builder for assembling a registry from providers and custom names
//! - JSON configuration for describing a registry declaratively

pub mod catalog;
pub mod models;

// Re-export catalog
pub use catalog::{all_models, list_models, lookup_provider, CatalogError, ModelEntry, Provider};

// Re-export models
pub use models::{ModelRegistry, RegistryConfig, SupportedModels};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
