//! Processing result types.

use crate::issues::IssueStatus;

/// Result of processing a single issue record.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// The creation call went through; the outcome is in the status.
    Success {
        /// Issue number from the definition file.
        definition_number: u64,
        /// Issue creation status.
        issue: IssueStatus,
    },

    /// The record was skipped because its number is in the
    /// already-existing set.
    SkippedExisting {
        /// Issue number from the definition file.
        definition_number: u64,
    },

    /// The creation call failed.
    Failed {
        /// Issue number from the definition file.
        definition_number: u64,
        /// Error message.
        error: String,
    },
}
