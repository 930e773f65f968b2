//! Seed configuration loading.
//!
//! This module handles parsing `seed.toml`, which externalizes everything
//! that varies per target: the repository, the set of issue numbers that
//! already exist, and the milestone definitions.

mod error;
mod repository;
mod seed;

pub use error::ConfigError;
pub use repository::TargetRepository;
pub use seed::{MilestoneDefinition, SeedConfig};

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl SeedConfig {
    /// Loads and validates a seed configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, unreadable, not
    /// valid TOML, or fails validation (malformed repository, empty or
    /// duplicate milestone titles).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading seed config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: SeedConfig = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;

        info!(
            repository = %config.repository,
            milestones = config.milestones.len(),
            existing_issues = config.existing_issues.len(),
            "Loaded seed config"
        );
        Ok(config)
    }

    /// Validates the configuration after deserialization.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        // Surfaces malformed repository values at load time rather than as a
        // remote 404 later.
        TargetRepository::parse(&self.repository).map_err(|_| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: format!(
                "repository '{}' must be in 'owner/name' format",
                self.repository
            ),
        })?;

        let mut seen = HashSet::new();
        for milestone in &self.milestones {
            if milestone.title.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: "milestone title must not be empty".to_string(),
                });
            }
            if !seen.insert(milestone.title.as_str()) {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!("duplicate milestone title '{}'", milestone.title),
                });
            }
        }

        Ok(())
    }

    /// Returns the parsed target repository.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a malformed repository
    /// value; [`Self::load`] has already rejected those.
    pub fn target_repository(&self) -> Result<TargetRepository, ConfigError> {
        TargetRepository::parse(&self.repository)
    }

    /// Returns the set of issue numbers that must not be re-filed.
    #[must_use]
    pub fn existing_issue_set(&self) -> HashSet<u64> {
        self.existing_issues.iter().copied().collect()
    }
}
