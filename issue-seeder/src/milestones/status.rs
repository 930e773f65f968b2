//! Milestone status types.

use serde::Serialize;

/// Status of a milestone ensure operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Milestone was created by this run.
    Created {
        /// Remote milestone number.
        number: u64,
    },

    /// Milestone already existed remotely.
    AlreadyExists {
        /// Remote milestone number.
        number: u64,
    },
}

impl MilestoneStatus {
    /// Returns the remote milestone number.
    #[must_use]
    pub fn number(&self) -> u64 {
        match self {
            Self::Created { number } | Self::AlreadyExists { number } => *number,
        }
    }
}
