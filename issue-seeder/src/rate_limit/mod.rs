//! Rate limit preflight for the GitHub API.
//!
//! The runner makes one rate-limit call before any mutation. A hard failure
//! here usually means bad credentials, which the runner treats as fatal; a
//! low remaining budget is only worth a warning since the run proceeds
//! sequentially with no retries.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use tracing::warn;

/// Checks the current rate limit status for the core API (issues,
/// milestones, etc.).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Warns when the remaining budget may not cover the planned API calls.
pub fn warn_if_low(info: &RateLimitInfo, planned_calls: usize) {
    if (info.remaining as usize) < planned_calls {
        warn!(
            remaining = info.remaining,
            planned = planned_calls,
            reset = info.reset,
            "Rate limit budget may not cover this run"
        );
    }
}
