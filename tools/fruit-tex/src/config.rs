//! Generator configuration (`fruit-tex.toml`)
//!
//! Every field is optional. A missing file and an empty file mean the same
//! thing: built-in catalog, fixed seed, standard paths.

use crate::batch::{BatchPlan, DEFAULT_OUTPUT_ROOT, STANDARD_SIZE, VARIANT_SIZES};
use crate::catalog::{Catalog, FruitSpec};
use crate::error::ConfigError;
use crate::seed::{SeedPolicy, DEFAULT_SEED};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub generation: GenerationSection,
    /// Replaces the built-in catalog when non-empty
    #[serde(default, rename = "fruit")]
    pub fruits: Vec<FruitSpec>,
}

/// Where files go
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

/// How textures are generated
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    /// Fixed run seed
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Ignore `seed` and draw a fresh one from OS entropy each run
    #[serde(default)]
    pub entropy: bool,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default = "default_standard_size")]
    pub standard_size: u32,
    #[serde(default = "default_variant_sizes")]
    pub variant_sizes: Vec<u32>,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            entropy: false,
            parallel: default_parallel(),
            standard_size: default_standard_size(),
            variant_sizes: default_variant_sizes(),
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_parallel() -> bool {
    true
}

fn default_standard_size() -> u32 {
    STANDARD_SIZE
}

fn default_variant_sizes() -> Vec<u32> {
    VARIANT_SIZES.to_vec()
}

impl GeneratorConfig {
    /// Parse configuration from TOML text
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn seed_policy(&self) -> SeedPolicy {
        if self.generation.entropy {
            SeedPolicy::Entropy
        } else {
            SeedPolicy::Fixed(self.generation.seed)
        }
    }

    /// Configured fruits, or the built-in catalog if none are listed
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.fruits.is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::from_specs(self.fruits.clone())
        }
    }

    pub fn standard_plan(&self) -> BatchPlan {
        BatchPlan::standard(self.generation.standard_size)
    }

    pub fn variant_plan(&self) -> BatchPlan {
        BatchPlan::variants(&self.generation.variant_sizes)
    }
}
