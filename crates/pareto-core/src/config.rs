//! Configuration for pareto
//!
//! Stored as TOML, by default in `pareto.toml` in the working directory.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::cost::MIN_DIMENSIONS;
use crate::error::{ParetoError, Result};
use crate::search::SearchOptions;

pub use types::{ParetoConfig, SearchConfig, CONFIG_FORMAT_VERSION};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "pareto.toml";

impl ParetoConfig {
    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ParetoConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `pareto.toml` from `dir` if present, otherwise defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ParetoError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        let search = &self.search;
        if search.dimensions < MIN_DIMENSIONS {
            bail_invalid!("search.dimensions", search.dimensions);
        }
        if !search.epsilon.is_finite() || search.epsilon < 0.0 {
            bail_invalid!("search.epsilon", search.epsilon);
        }
        if !search.criteria.is_empty() && search.criteria.len() != search.dimensions {
            bail_invalid!(
                "search.criteria",
                format!(
                    "{} names for {} dimensions",
                    search.criteria.len(),
                    search.dimensions
                )
            );
        }
        Ok(())
    }

    /// Search options seeded from the configured defaults
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            epsilon: self.search.epsilon,
            max_expansions: self.search.max_expansions,
            cancel: None,
        }
    }

    /// Display name for cost component `i`
    pub fn criterion_name(&self, i: usize) -> String {
        self.search
            .criteria
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("c{}", i))
    }
}
