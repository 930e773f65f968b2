//! Run summary types and helpers.

mod result;
mod seed_summary;

pub use result::ProcessingResult;
pub use seed_summary::SeedSummary;
