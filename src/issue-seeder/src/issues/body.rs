//! Issue body rendering and the hidden seed marker.

use crate::sheet::{Column, SeedRow};

const MARKER_OPEN: &str = "<!-- seed_id:";
const MARKER_CLOSE: &str = " -->";

/// Fields rendered into the body, in display order.
const BODY_FIELDS: [Column; 15] = [
    Column::Week,
    Column::Squad,
    Column::Role,
    Column::StudentId,
    Column::AiAssist,
    Column::Task,
    Column::Description,
    Column::Deliverables,
    Column::AcceptanceCriteria,
    Column::SuggestedFiles,
    Column::VerificationCommand,
    Column::SuggestedBranch,
    Column::PrTitle,
    Column::Reviewer,
    Column::Notes,
];

fn field(row: &SeedRow, column: Column) -> Option<&str> {
    match column {
        Column::Week => row.week.as_deref(),
        Column::Squad => row.squad.as_deref(),
        Column::Role => row.role.as_deref(),
        Column::Task => row.task.as_deref(),
        Column::AiAssist => row.ai_assist.as_deref(),
        Column::StudentId => row.student_id.as_deref(),
        Column::SeedId => row.seed_id.as_deref(),
        Column::PrTitle => row.pr_title.as_deref(),
        Column::Description => row.description.as_deref(),
        Column::Deliverables => row.deliverables.as_deref(),
        Column::AcceptanceCriteria => row.acceptance_criteria.as_deref(),
        Column::SuggestedFiles => row.suggested_files.as_deref(),
        Column::VerificationCommand => row.verification_command.as_deref(),
        Column::SuggestedBranch => row.suggested_branch.as_deref(),
        Column::Reviewer => row.reviewer.as_deref(),
        Column::Notes => row.notes.as_deref(),
    }
}

/// The hidden marker line recording which row an issue came from.
#[must_use]
pub fn seed_marker(seed_id: &str) -> String {
    format!("{MARKER_OPEN}{seed_id}{MARKER_CLOSE}")
}

/// Renders the issue body for `row`.
///
/// Each present field becomes a `**Header:** value` line; the seed marker
/// follows after a blank line.
#[must_use]
pub fn build_body(row: &SeedRow, seed_id: &str) -> String {
    let mut parts: Vec<String> = BODY_FIELDS
        .into_iter()
        .filter_map(|column| {
            field(row, column).map(|value| format!("**{}:** {value}", column.header()))
        })
        .collect();

    parts.push(format!("\n{}", seed_marker(seed_id)));
    parts.join("\n")
}

/// Extracts the seed id from the marker in `body`, if there is one.
#[must_use]
pub fn marker_seed_id(body: &str) -> Option<&str> {
    let start = body.rfind(MARKER_OPEN)? + MARKER_OPEN.len();
    let rest = &body[start..];
    let end = rest.find(MARKER_CLOSE)?;
    Some(rest[..end].trim())
}
