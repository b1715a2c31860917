// File: src/config.rs
// Purpose: Link generation settings parsed from links.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::generator::{GeneratorOptions, UrlGenerator, ValidationMode};
use crate::path::is_canonical_path;
use crate::registry::{DuplicatePolicy, MissingSchemaPolicy, RegistryOptions, RouteRegistry};

/// Link configuration
///
/// ```toml
/// [generation]
/// mode = "strict"
/// base_path = "/app"
///
/// [registry]
/// duplicates = "replace"
/// missing_schema = "error"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LinksConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// "lenient" (default) or "strict"
    #[serde(default)]
    pub mode: ValidationMode,

    /// Percent-encode substituted path values (default: true)
    #[serde(default = "default_true")]
    pub encode_path_params: bool,

    /// Base path for all generated paths (e.g., "/app")
    #[serde(default)]
    pub base_path: Option<String>,
}

/// Route registration settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegistryConfig {
    /// "reject" (default) or "replace"
    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    /// "warn" (default) or "error"
    #[serde(default)]
    pub missing_schema: MissingSchemaPolicy,
}

fn default_true() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            encode_path_params: default_true(),
            base_path: None,
        }
    }
}

impl LinksConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./links.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("links.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: LinksConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(base) = &self.generation.base_path {
            if base != "/" && !is_canonical_path(base) {
                bail!(
                    "base_path {:?} must start with '/' and must not end with '/' or contain '//'",
                    base
                );
            }
        }
        Ok(())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            mode: self.generation.mode,
            encode_path_params: self.generation.encode_path_params,
            base_path: self.generation.base_path.clone(),
        }
    }

    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            duplicates: self.registry.duplicates,
            missing_schema: self.registry.missing_schema,
        }
    }

    pub fn generator(&self) -> UrlGenerator {
        UrlGenerator::new(self.generator_options())
    }

    /// Empty registry using these settings
    pub fn registry(&self) -> RouteRegistry {
        RouteRegistry::with_options(self.registry_options(), self.generator_options())
    }
}
