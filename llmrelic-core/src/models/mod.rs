//! Supported-model registry and the ways to assemble one.
//!
//! This module provides:
//! - `ModelRegistry` - Mutable set of supported model names
//! - `SupportedModels` - Fluent builder producing a `ModelRegistry`
//! - `RegistryConfig` - JSON-loadable description of a registry

mod builder;
mod config;
mod registry;

pub use builder::SupportedModels;
pub use config::RegistryConfig;
pub use registry::ModelRegistry;
