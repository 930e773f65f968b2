//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for running the issue seeder.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory containing `ISSUES_PHASE*.md` definition files.
    definitions_path: PathBuf,
    /// Path to the seed config file.
    config_path: PathBuf,
    /// GitHub token used for API calls.
    token: String,
    /// Whether to preview changes without creating issues/milestones.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(definitions_path: PathBuf, config_path: PathBuf, token: String, dry_run: bool) -> Self {
        Self {
            definitions_path,
            config_path,
            token,
            dry_run,
        }
    }

    /// Returns the definitions directory path.
    pub fn definitions_path(&self) -> &Path {
        &self.definitions_path
    }

    /// Returns the seed config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
