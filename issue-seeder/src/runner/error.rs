//! Runner error types.

/// Errors that can occur while running the seeder.
///
/// These are the environment failures that abort a run before any partial
/// work; per-issue and per-milestone failures are recorded in the summary
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Seed configuration errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Definition file location and read errors.
    #[error(transparent)]
    Definition(#[from] crate::definitions::DefinitionError),

    /// GitHub API client initialization or preflight errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The definitions directory contains no definition files.
    #[error("No issue definition files found in '{path}'")]
    NoDefinitionFiles { path: String },
}
