//! GitHub milestone creation and lookup.
//!
//! Milestones are ensured with create-or-fetch semantics: a create that the
//! API rejects as a duplicate falls back to listing remote milestones and
//! resolving the number by exact title match. octocrab has no typed surface
//! for the milestones endpoint, so this module uses its generic REST routes.

mod error;
mod seeded_milestone;
mod status;

pub use error::MilestoneError;
pub use seeded_milestone::SeededMilestone;
pub use status::MilestoneStatus;

use crate::config::{MilestoneDefinition, TargetRepository};
use octocrab::models::Milestone;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

#[derive(Serialize)]
struct CreateMilestoneRequest<'a> {
    title: &'a str,
    description: &'a str,
    state: &'a str,
}

/// Milestones fetched per list call, the API maximum.
const MILESTONE_PAGE_SIZE: u32 = 100;

#[derive(Serialize)]
struct ListMilestonesParams<'a> {
    state: &'a str,
    per_page: u32,
    page: u32,
}

/// Ensures a milestone exists in the target repository.
///
/// Attempts to create the milestone; when the API rejects the create as a
/// duplicate, resolves the existing milestone's number by title instead.
///
/// # Errors
///
/// Returns [`MilestoneError`] when the create fails for any other reason, or
/// when a rejected duplicate cannot be found by title afterwards.
pub async fn ensure_milestone(
    octocrab: &Octocrab,
    repository: &TargetRepository,
    definition: &MilestoneDefinition,
) -> Result<SeededMilestone, MilestoneError> {
    let span = info_span!(
        "ensure_milestone",
        repo = %repository.full_name,
        title = %definition.title
    );

    async {
        info!("Ensuring milestone");

        match create_milestone(octocrab, repository, definition).await {
            Ok(number) => {
                info!(number, "Milestone created");
                Ok(SeededMilestone {
                    title: definition.title.clone(),
                    description: definition.description.clone(),
                    status: MilestoneStatus::Created { number },
                })
            }
            Err(e) if is_already_exists(&e) => {
                debug!("Milestone already exists, resolving number by title");
                match find_milestone_by_title(octocrab, repository, &definition.title).await? {
                    Some(number) => {
                        info!(number, "Milestone already exists");
                        Ok(SeededMilestone {
                            title: definition.title.clone(),
                            description: definition.description.clone(),
                            status: MilestoneStatus::AlreadyExists { number },
                        })
                    }
                    None => Err(MilestoneError::NotFoundAfterConflict {
                        title: definition.title.clone(),
                    }),
                }
            }
            Err(e) => Err(MilestoneError::GitHubError(e)),
        }
    }
    .instrument(span)
    .await
}

/// Creates a milestone via GitHub API, returning its number.
async fn create_milestone(
    octocrab: &Octocrab,
    repository: &TargetRepository,
    definition: &MilestoneDefinition,
) -> Result<u64, octocrab::Error> {
    let route = format!(
        "/repos/{}/{}/milestones",
        repository.owner, repository.name
    );
    let body = CreateMilestoneRequest {
        title: &definition.title,
        description: &definition.description,
        state: "open",
    };

    let milestone: Milestone = octocrab.post(route, Some(&body)).await?;
    Ok(milestone.number as u64)
}

/// Looks up a remote milestone number by exact title match, following
/// pagination until a partial page signals the end of the listing.
async fn find_milestone_by_title(
    octocrab: &Octocrab,
    repository: &TargetRepository,
    title: &str,
) -> Result<Option<u64>, MilestoneError> {
    let route = format!(
        "/repos/{}/{}/milestones",
        repository.owner, repository.name
    );

    let mut page = 1;
    loop {
        // Closed milestones still collide on title, so list all states.
        let params = ListMilestonesParams {
            state: "all",
            per_page: MILESTONE_PAGE_SIZE,
            page,
        };

        let milestones: Vec<Milestone> = octocrab.get(route.as_str(), Some(&params)).await?;

        if let Some(milestone) = milestones.iter().find(|milestone| milestone.title == title) {
            return Ok(Some(milestone.number as u64));
        }

        if is_last_page(milestones.len()) {
            return Ok(None);
        }
        page += 1;
    }
}

/// A partial page means the listing is exhausted.
fn is_last_page(returned: usize) -> bool {
    returned < MILESTONE_PAGE_SIZE as usize
}

/// Checks if an error indicates the milestone already exists.
fn is_already_exists(error: &octocrab::Error) -> bool {
    message_indicates_conflict(&error.to_string())
}

/// The duplicate-title rejection arrives as a 422 "Validation Failed" with
/// an `already_exists` error code.
fn message_indicates_conflict(message: &str) -> bool {
    let msg = message.to_lowercase();
    msg.contains("already_exists") || msg.contains("validation failed") || msg.contains("422")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_detect_duplicate_conflict() {
        assert!(message_indicates_conflict(
            "GitHub API error: Validation Failed"
        ));
        assert!(message_indicates_conflict(
            "422: {\"resource\":\"Milestone\",\"code\":\"already_exists\"}"
        ));

        assert!(!message_indicates_conflict("GitHub API error: Not Found"));
        assert!(!message_indicates_conflict("connection refused"));
    }

    #[test]
    fn full_pages_keep_the_listing_going() {
        assert!(is_last_page(0));
        assert!(is_last_page(MILESTONE_PAGE_SIZE as usize - 1));

        assert!(!is_last_page(MILESTONE_PAGE_SIZE as usize));
    }
}
