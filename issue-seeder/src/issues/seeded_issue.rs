//! Seeded issue information.

/// A GitHub issue filed from a parsed definition record.
#[derive(Debug, Clone)]
pub struct SeededIssue {
    /// Issue number from the definition file, not the remote tracker.
    pub definition_number: u64,

    /// Issue title.
    pub title: String,

    /// Milestone title the issue was filed under, when resolved.
    pub milestone: Option<String>,

    /// Creation status.
    pub status: super::IssueStatus,
}
