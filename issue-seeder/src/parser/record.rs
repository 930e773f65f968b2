//! Parsed issue record.

use serde::Serialize;

/// One issue parsed from a markdown definition file.
///
/// Records are built once per parse pass and consumed immediately by the
/// runner as input to the remote creation call; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    /// Issue number from the `## Issue #<N>: <title>` header.
    pub number: u64,

    /// Issue title, the trimmed remainder of the header line.
    pub title: String,

    /// Labels in appearance order from the `**Labels**: ...` line.
    pub labels: Vec<String>,

    /// Milestone name, normalized to `Phase <n>` when the raw value
    /// contains one.
    pub milestone: Option<String>,

    /// Issue body, from the `### Description` marker to the section end.
    pub body: String,
}
