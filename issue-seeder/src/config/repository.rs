//! Target repository identification.

use crate::config::ConfigError;
use serde::Serialize;

/// The repository that issues and milestones are created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRepository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,
}

impl TargetRepository {
    /// Parses an "owner/name" string into a repository identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when the value is not exactly
    /// `owner/name` with both parts non-empty.
    pub fn parse(full_name: &str) -> Result<Self, ConfigError> {
        let mut parts = full_name.splitn(2, '/');
        let owner = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(ConfigError::ValidationError {
                path: full_name.to_string(),
                message: "repository must be in 'owner/name' format".to_string(),
            });
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
            full_name: full_name.to_string(),
        })
    }
}
