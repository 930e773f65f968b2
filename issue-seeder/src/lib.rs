#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod definitions;
pub mod issues;
pub mod milestones;
pub mod parser;
pub mod rate_limit;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, MilestoneDefinition, SeedConfig, TargetRepository};
pub use definitions::{load_definition_file, scan_definition_files, DefinitionError};
pub use issues::{create_issue, IssueError, IssueStatus, SeededIssue};
pub use milestones::{ensure_milestone, MilestoneError, MilestoneStatus, SeededMilestone};
pub use parser::{parse_issues, IssueRecord};
pub use rate_limit::{check_core_rate_limit, RateLimitInfo};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, SeedSummary};
