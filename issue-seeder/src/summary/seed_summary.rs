//! Run summary types.

use super::result::ProcessingResult;
use crate::issues::IssueStatus;
use crate::milestones::{MilestoneStatus, SeededMilestone};

/// Summary of a complete seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    /// Number of definition files parsed.
    pub files_parsed: usize,

    /// Number of issue records parsed from all files.
    pub records_parsed: usize,

    /// Number of records skipped because they already exist remotely.
    pub existing_skipped: usize,

    /// Number of issues successfully created.
    pub issues_created: usize,

    /// Number of issues skipped (e.g., no write access).
    pub issues_skipped: usize,

    /// Number of issues that failed to create.
    pub issues_failed: usize,

    /// Number of milestones created by this run.
    pub milestones_created: usize,

    /// Number of milestones that already existed.
    pub milestones_existing: usize,

    /// Number of milestones that failed to create or resolve.
    pub milestones_failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl SeedSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Success { issue, .. } => match issue {
                IssueStatus::Created { .. } => self.issues_created += 1,
                IssueStatus::Skipped { .. } => self.issues_skipped += 1,
            },
            ProcessingResult::SkippedExisting { .. } => self.existing_skipped += 1,
            ProcessingResult::Failed { .. } => self.issues_failed += 1,
        }
    }

    /// Updates the summary with an ensured milestone.
    pub fn record_milestone(&mut self, milestone: &SeededMilestone) {
        match milestone.status {
            MilestoneStatus::Created { .. } => self.milestones_created += 1,
            MilestoneStatus::AlreadyExists { .. } => self.milestones_existing += 1,
        }
    }

    /// Records a milestone that could not be created or resolved.
    pub fn record_milestone_failure(&mut self) {
        self.milestones_failed += 1;
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0 || self.milestones_failed > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_result() {
        let mut summary = SeedSummary::new(false);

        summary.record_result(&ProcessingResult::Success {
            definition_number: 42,
            issue: IssueStatus::Created {
                number: 1,
                url: "https://example.com".to_string(),
            },
        });
        summary.record_result(&ProcessingResult::Success {
            definition_number: 44,
            issue: IssueStatus::Skipped {
                reason: "no write access".to_string(),
            },
        });
        summary.record_result(&ProcessingResult::SkippedExisting {
            definition_number: 10,
        });
        // Creation failures arrive as a failed result, not an issue status.
        summary.record_result(&ProcessingResult::Failed {
            definition_number: 43,
            error: "boom".to_string(),
        });

        assert_eq!(summary.issues_created, 1);
        assert_eq!(summary.issues_skipped, 1);
        assert_eq!(summary.existing_skipped, 1);
        assert_eq!(summary.issues_failed, 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn can_record_milestones() {
        let mut summary = SeedSummary::new(false);

        summary.record_milestone(&SeededMilestone {
            title: "Phase 1".to_string(),
            description: String::new(),
            status: MilestoneStatus::Created { number: 1 },
        });
        summary.record_milestone(&SeededMilestone {
            title: "Phase 2".to_string(),
            description: String::new(),
            status: MilestoneStatus::AlreadyExists { number: 2 },
        });
        summary.record_milestone_failure();

        assert_eq!(summary.milestones_created, 1);
        assert_eq!(summary.milestones_existing, 1);
        assert_eq!(summary.milestones_failed, 1);
        assert!(!summary.all_success());
    }
}
