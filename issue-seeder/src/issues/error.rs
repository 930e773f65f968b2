//! Issue creation error types.

use thiserror::Error;

/// Errors that can occur during issue operations.
#[derive(Debug, Error)]
pub enum IssueError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
