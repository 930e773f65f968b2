//! Seed configuration deserialization.

use serde::Deserialize;

/// Parsed contents of a `seed.toml` file.
///
/// ```toml
/// repository = "go-foundations/workerpool"
/// existing-issues = [10, 11, 12, 13, 14, 15]
///
/// [[milestones]]
/// title = "Phase 1"
/// description = "Foundation - Resource types, monitoring, task API"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SeedConfig {
    /// Target repository in "owner/name" format.
    pub repository: String,

    /// Issue numbers already present in the tracker; records with these
    /// numbers are skipped instead of re-filed.
    #[serde(default)]
    pub existing_issues: Vec<u64>,

    /// Milestones to create (or fetch) before filing issues.
    #[serde(default)]
    pub milestones: Vec<MilestoneDefinition>,
}

/// A milestone to ensure exists in the target repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MilestoneDefinition {
    /// Milestone title, matched exactly against remote milestones.
    pub title: String,

    /// Milestone description.
    #[serde(default)]
    pub description: String,
}
