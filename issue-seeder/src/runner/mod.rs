//! Orchestrates a full seeding run.
//!
//! The runner is deliberately sequential: definition files are parsed in
//! sorted name order, milestones are ensured one at a time, and issues are
//! filed one API call at a time. Remote failures are tallied and reported,
//! never fatal; only environment failures (missing config, missing input
//! files, authentication) abort the run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::{MilestoneDefinition, SeedConfig, TargetRepository};
use crate::definitions::{load_definition_file, scan_definition_files};
use crate::issues::{create_issue, IssueStatus};
use crate::milestones::ensure_milestone;
use crate::parser::{parse_issues, IssueRecord};
use crate::rate_limit::{check_core_rate_limit, warn_if_low};
use crate::summary::{ProcessingResult, SeedSummary};
use octocrab::Octocrab;
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Orchestrates parsing definition files and seeding the remote tracker.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .build()?;
        Ok(Self { config, octocrab })
    }

    /// Executes the full seeding flow.
    pub async fn run(&self) -> Result<SeedSummary, RunnerError> {
        let mut summary = SeedSummary::new(self.config.dry_run());

        let seed = SeedConfig::load(self.config.config_path())?;
        let repository = seed.target_repository()?;

        let files = scan_definition_files(self.config.definitions_path())?;
        if files.is_empty() {
            return Err(RunnerError::NoDefinitionFiles {
                path: self.config.definitions_path().display().to_string(),
            });
        }
        info!(count = files.len(), "Found definition files");

        let mut records = Vec::new();
        for path in &files {
            let contents = load_definition_file(path)?;
            let parsed = parse_issues(&contents);
            info!(path = %path.display(), count = parsed.len(), "Parsed definition file");
            records.extend(parsed);
            summary.files_parsed += 1;
        }
        summary.records_parsed = records.len();

        // Records already filed in the tracker are dropped upfront so the
        // dry-run preview matches what a live run would create.
        let existing = seed.existing_issue_set();
        let (to_create, already_filed): (Vec<IssueRecord>, Vec<IssueRecord>) = records
            .into_iter()
            .partition(|record| !existing.contains(&record.number));

        for record in &already_filed {
            info!(definition_number = record.number, "Issue already exists, skipping");
            summary.record_result(&ProcessingResult::SkippedExisting {
                definition_number: record.number,
            });
        }

        if self.config.dry_run() {
            print_dry_run_preview(&repository, &seed.milestones, &to_create);
            return Ok(summary);
        }

        // Doubles as an authentication check before any mutation.
        let rate = check_core_rate_limit(&self.octocrab).await?;
        warn_if_low(&rate, seed.milestones.len() + to_create.len());

        let milestone_numbers = self
            .ensure_milestones(&repository, &seed.milestones, &mut summary)
            .await;

        for record in &to_create {
            let result = self
                .process_record(&repository, record, &milestone_numbers)
                .await;
            summary.record_result(&result);
        }

        Ok(summary)
    }

    /// Ensures all configured milestones exist, returning a title-to-number
    /// map for the ones that could be resolved.
    async fn ensure_milestones(
        &self,
        repository: &TargetRepository,
        definitions: &[MilestoneDefinition],
        summary: &mut SeedSummary,
    ) -> HashMap<String, u64> {
        let mut numbers = HashMap::new();

        for definition in definitions {
            match ensure_milestone(&self.octocrab, repository, definition).await {
                Ok(milestone) => {
                    numbers.insert(milestone.title.clone(), milestone.status.number());
                    summary.record_milestone(&milestone);
                }
                Err(e) => {
                    error!(title = %definition.title, error = %e, "Failed to ensure milestone");
                    summary.record_milestone_failure();
                }
            }
        }

        numbers
    }

    /// Files one issue record, mapping any remote failure to a result
    /// instead of an error so the batch continues.
    async fn process_record(
        &self,
        repository: &TargetRepository,
        record: &IssueRecord,
        milestone_numbers: &HashMap<String, u64>,
    ) -> ProcessingResult {
        let milestone_number = match &record.milestone {
            Some(title) => {
                let number = milestone_numbers.get(title).copied();
                if number.is_none() {
                    warn!(
                        definition_number = record.number,
                        milestone = %title,
                        "Milestone not resolved, filing issue without one"
                    );
                }
                number
            }
            None => None,
        };

        match create_issue(&self.octocrab, repository, record, milestone_number).await {
            Ok(issue) => {
                if let IssueStatus::Skipped { reason } = &issue.status {
                    warn!(definition_number = record.number, reason = %reason, "Issue skipped");
                }
                ProcessingResult::Success {
                    definition_number: record.number,
                    issue: issue.status,
                }
            }
            Err(e) => {
                error!(
                    definition_number = record.number,
                    error = %e,
                    "Failed to create issue"
                );
                ProcessingResult::Failed {
                    definition_number: record.number,
                    error: e.to_string(),
                }
            }
        }
    }
}

fn print_dry_run_preview(
    repository: &TargetRepository,
    milestones: &[MilestoneDefinition],
    records: &[IssueRecord],
) {
    println!("\n[DRY RUN] Repository: {}", repository.full_name);

    if !milestones.is_empty() {
        println!("  Would ensure {} milestones:", milestones.len());
        for milestone in milestones {
            println!("    - {}: {}", milestone.title, milestone.description);
        }
    }

    println!("  Would create {} issues:\n", records.len());
    for (i, record) in records.iter().enumerate() {
        println!(
            "  [{}/{}] #{}: {}",
            i + 1,
            records.len(),
            record.number,
            record.title
        );
        if !record.labels.is_empty() {
            println!("    Labels: {}", record.labels.join(", "));
        }
        if let Some(milestone) = &record.milestone {
            println!("    Milestone: {milestone}");
        }
    }

    if let Some(first) = records.first() {
        println!("\n  Sample issue body:");
        for line in first.body.lines().take(10) {
            println!("    {line}");
        }
        if first.body.lines().count() > 10 {
            println!("    ...");
        }
    }

    println!();
}
