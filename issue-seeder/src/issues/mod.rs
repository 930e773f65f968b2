//! GitHub issue creation.
//!
//! This module files issues parsed from definition files into the target
//! repository, one API call per record, and maps permission problems to a
//! skip rather than a failure.

mod error;
mod seeded_issue;
mod status;

pub use error::IssueError;
pub use seeded_issue::SeededIssue;
pub use status::IssueStatus;

use crate::config::TargetRepository;
use crate::parser::IssueRecord;
use octocrab::Octocrab;
use tracing::{info, info_span, warn, Instrument};

/// Creates an issue in the target repository from a parsed record.
///
/// The record's `number` identifies the issue within the definition files;
/// the remote tracker assigns its own number, which is returned in the
/// [`Created`][`IssueStatus::Created`] status.
///
/// # Arguments
///
/// * `octocrab` - Authenticated GitHub client
/// * `repository` - Target repository
/// * `record` - Parsed issue record
/// * `milestone_number` - Remote milestone number, when the record's
///   milestone was resolved
///
/// # Errors
///
/// Returns [`IssueError`] if creation fails (except for permission denied,
/// which returns a [`Skipped`][`IssueStatus::Skipped`] status).
pub async fn create_issue(
    octocrab: &Octocrab,
    repository: &TargetRepository,
    record: &IssueRecord,
    milestone_number: Option<u64>,
) -> Result<SeededIssue, IssueError> {
    let span = info_span!(
        "create_issue",
        repo = %repository.full_name,
        definition_number = record.number
    );

    async {
        info!(title = %record.title, "Creating issue");

        match create_github_issue(octocrab, repository, record, milestone_number).await {
            Ok((number, url)) => {
                info!(issue_number = number, "Issue created successfully");
                Ok(SeededIssue {
                    definition_number: record.number,
                    title: record.title.clone(),
                    milestone: record.milestone.clone(),
                    status: IssueStatus::Created { number, url },
                })
            }
            Err(e) => {
                if is_permission_denied(&e) {
                    warn!("Permission denied, skipping issue");
                    Ok(SeededIssue {
                        definition_number: record.number,
                        title: record.title.clone(),
                        milestone: record.milestone.clone(),
                        status: IssueStatus::Skipped {
                            reason: "no write access".to_string(),
                        },
                    })
                } else {
                    Err(e)
                }
            }
        }
    }
    .instrument(span)
    .await
}

/// Creates an issue via GitHub API.
async fn create_github_issue(
    octocrab: &Octocrab,
    repository: &TargetRepository,
    record: &IssueRecord,
    milestone_number: Option<u64>,
) -> Result<(u64, String), IssueError> {
    let issues = octocrab.issues(&repository.owner, &repository.name);
    let mut create = issues
        .create(record.title.as_str())
        .body(record.body.as_str());

    if !record.labels.is_empty() {
        create = create.labels(record.labels.clone());
    }

    if let Some(number) = milestone_number {
        create = create.milestone(number);
    }

    let issue = create.send().await?;

    let url = issue.html_url.to_string();
    Ok((issue.number, url))
}

/// Checks if an error indicates permission denied.
fn is_permission_denied(error: &IssueError) -> bool {
    let IssueError::GitHubError(e) = error;
    message_indicates_permission_denied(&e.to_string())
}

/// A create rejected for missing write access arrives as a 403 Forbidden.
fn message_indicates_permission_denied(message: &str) -> bool {
    let msg = message.to_lowercase();
    msg.contains("403") || msg.contains("forbidden") || msg.contains("permission")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_detect_permission_denied() {
        assert!(message_indicates_permission_denied(
            "GitHub API error: 403 Forbidden"
        ));
        assert!(message_indicates_permission_denied(
            "Permission to go-foundations/workerpool denied"
        ));

        assert!(!message_indicates_permission_denied(
            "GitHub API error: Not Found"
        ));
        assert!(!message_indicates_permission_denied("connection refused"));
    }
}
