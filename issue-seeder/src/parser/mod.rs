//! Markdown issue-definition parsing.
//!
//! Definition files contain one or more issue sections separated by `---`:
//!
//! ```text
//! ## Issue #42: Add caching layer
//! **Labels**: perf, caching
//! **Milestone**: Phase 3 - Learning and Profiling
//! ### Description
//! Add a caching layer to reduce monitoring overhead.
//! ---
//! ## Issue #43: ...
//! ```
//!
//! Parsing is pure and stateless: same input, same output, no I/O. Malformed
//! sections are dropped rather than reported as errors; the runner decides
//! what to do with the records that survive.

mod record;

pub use record::IssueRecord;

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Delimiter between issue sections in a definition file.
const SECTION_DELIMITER: &str = "---";

/// Marker introducing the issue body. Sections without it are dropped.
const DESCRIPTION_MARKER: &str = "### Description";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## Issue #(\d+): (.+)").unwrap());
static LABELS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Labels\*\*: (.+)").unwrap());
static MILESTONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Milestone\*\*: (.+)").unwrap());

/// Parses markdown definition text into issue records.
///
/// The text is split on the literal `---` delimiter and each section is
/// parsed independently. Sections that are empty, have no recognizable
/// `## Issue #<N>: <title>` header (e.g. a preamble before the first issue),
/// or lack a `### Description` marker are skipped; they never fail the parse.
///
/// Records are returned in source order, which is appearance order in the
/// file and not necessarily ascending issue number.
pub fn parse_issues(text: &str) -> Vec<IssueRecord> {
    let mut records = Vec::new();

    for section in text.split(SECTION_DELIMITER) {
        if section.trim().is_empty() {
            continue;
        }

        if let Some(record) = parse_section(section) {
            records.push(record);
        }
    }

    records
}

/// Parses a single `---`-delimited section into a record.
///
/// Returns [`None`] for sections that don't describe a complete issue.
fn parse_section(section: &str) -> Option<IssueRecord> {
    let header = match HEADER_RE.captures(section) {
        Some(header) => header,
        None => {
            // Section boundaries don't always align one-to-one with issues;
            // preambles and notes between delimiters are expected.
            debug!("Section has no issue header, skipping");
            return None;
        }
    };

    let number: u64 = match header[1].parse() {
        Ok(number) => number,
        Err(_) => {
            debug!(raw = &header[1], "Issue number out of range, skipping");
            return None;
        }
    };
    let title = header[2].trim().to_string();

    let labels: Vec<String> = LABELS_RE
        .captures(section)
        .map(|captures| {
            captures[1]
                .split(',')
                .map(|label| label.trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let milestone = MILESTONE_RE
        .captures(section)
        .map(|captures| normalize_milestone(captures[1].trim()));

    // Everything from the marker (inclusive) to the section end is the body.
    // A section without the marker is dropped entirely, even with a valid
    // header; see the module docs.
    let body = match section.find(DESCRIPTION_MARKER) {
        Some(start) => section[start..].trim().to_string(),
        None => {
            debug!(number, %title, "Section has no description marker, dropping");
            return None;
        }
    };

    Some(IssueRecord {
        number,
        title,
        labels,
        milestone,
        body,
    })
}

/// Normalizes a raw milestone value to its phase name.
///
/// A value containing `"Phase <n>"` for n in 1..=7 anywhere in its text
/// becomes exactly `"Phase <n>"` (lowest n wins); anything else is passed
/// through unmodified.
fn normalize_milestone(raw: &str) -> String {
    for phase in 1..=7u32 {
        let name = format!("Phase {phase}");
        if raw.contains(&name) {
            return name;
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"## Issue #42: Add caching layer
**Labels**: perf, caching
**Milestone**: Phase 3 - Learning and Profiling
### Description
Add a caching layer to reduce monitoring overhead."#;

    #[test]
    fn parse_well_formed_section() {
        let records = parse_issues(WELL_FORMED);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.number, 42);
        assert_eq!(record.title, "Add caching layer");
        assert_eq!(record.labels, vec!["perf", "caching"]);
        assert_eq!(record.milestone.as_deref(), Some("Phase 3"));
        assert_eq!(
            record.body,
            "### Description\nAdd a caching layer to reduce monitoring overhead."
        );
    }

    #[test]
    fn parse_returns_one_record_per_section() {
        let text = "\
## Issue #1: First
### Description
One.
---
## Issue #2: Second
### Description
Two.
---
## Issue #3: Third
### Description
Three.
";
        let records = parse_issues(text);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].number, 1);
        assert_eq!(records[1].number, 2);
        assert_eq!(records[2].number, 3);
    }

    #[test]
    fn records_keep_source_order_not_number_order() {
        let text = "\
## Issue #9: Later number first
### Description
Nine.
---
## Issue #2: Earlier number second
### Description
Two.
";
        let records = parse_issues(text);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].number, 9);
        assert_eq!(records[1].number, 2);
    }

    #[test]
    fn section_without_description_is_dropped() {
        let text = "\
## Issue #7: Has header and labels but no body
**Labels**: good, labels
**Milestone**: Phase 2
---
## Issue #8: Complete
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 8);
    }

    #[test]
    fn section_without_header_is_skipped() {
        let text = "\
# Issue Definitions

This preamble has no issue header.
---
## Issue #10: Real issue
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 10);
    }

    #[test]
    fn labels_are_trimmed_per_token() {
        let text = "\
## Issue #1: Labels
**Labels**: a, b , c
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records[0].labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_labels_line_yields_empty_labels() {
        let text = "\
## Issue #1: No labels
### Description
Body.
";
        let records = parse_issues(text);

        assert!(records[0].labels.is_empty());
    }

    #[test]
    fn milestone_with_phase_substring_is_normalized() {
        let text = "\
## Issue #1: Milestone
**Milestone**: Phase 3 - Learning and Profiling
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records[0].milestone.as_deref(), Some("Phase 3"));
    }

    #[test]
    fn milestone_without_phase_substring_passes_through() {
        let text = "\
## Issue #1: Milestone
**Milestone**: Backlog Grooming
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records[0].milestone.as_deref(), Some("Backlog Grooming"));
    }

    #[test]
    fn missing_milestone_line_yields_none() {
        let text = "\
## Issue #1: No milestone
### Description
Body.
";
        let records = parse_issues(text);

        assert_eq!(records[0].milestone, None);
    }

    #[test]
    fn normalize_milestone_matches_lowest_phase_first() {
        // "Phase 12" contains "Phase 1", so the ordered check wins.
        assert_eq!(normalize_milestone("Phase 12 - Future"), "Phase 1");
        assert_eq!(normalize_milestone("prep for Phase 7"), "Phase 7");
        assert_eq!(normalize_milestone("Phase 8 - Out of range"), "Phase 8 - Out of range");
    }

    #[test]
    fn body_starts_at_description_marker() {
        let text = "\
## Issue #1: Body extent
**Labels**: a
Notes between metadata and body are not part of the body.
### Description
First line.

Last line.
";
        let records = parse_issues(text);

        assert!(records[0].body.starts_with("### Description"));
        assert!(records[0].body.ends_with("Last line."));
        assert!(!records[0].body.contains("Notes between"));
    }

    #[test]
    fn parse_is_idempotent() {
        let first = parse_issues(WELL_FORMED);
        let second = parse_issues(WELL_FORMED);

        assert_eq!(first, second);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_issues("").is_empty());
        assert!(parse_issues("---\n---\n  \n---").is_empty());
    }

    #[test]
    fn oversized_issue_number_is_skipped() {
        let text = "\
## Issue #99999999999999999999999999: Overflow
### Description
Body.
";
        assert!(parse_issues(text).is_empty());
    }
}
