//! Seeded milestone information.

/// A milestone ensured to exist in the target repository.
#[derive(Debug, Clone)]
pub struct SeededMilestone {
    /// Milestone title.
    pub title: String,

    /// Milestone description.
    pub description: String,

    /// Outcome of the ensure operation.
    pub status: super::MilestoneStatus,
}
