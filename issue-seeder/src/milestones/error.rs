//! Milestone error types.

use thiserror::Error;

/// Errors that can occur during milestone operations.
#[derive(Debug, Error)]
pub enum MilestoneError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// Creation was rejected as a duplicate, but no remote milestone with
    /// the same title could be found afterwards.
    #[error("Milestone '{title}' reported as existing but not found")]
    NotFoundAfterConflict { title: String },
}
