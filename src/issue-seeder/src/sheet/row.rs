//! A single task row read from the spreadsheet.

use serde::Serialize;

/// One spreadsheet row describing a task to seed.
///
/// Every attribute is optional: a blank or whitespace-only cell, or a column
/// missing from the sheet, is `None`. Present values are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedRow {
    /// 1-based position of the row across all sheets, excluding headers.
    pub row_number: usize,

    /// Name of the sheet the row came from.
    pub sheet: String,

    /// Unique row identifier (`Issue UID`).
    pub seed_id: Option<String>,

    /// Task title (`Tarefa`).
    pub task: Option<String>,

    pub week: Option<String>,
    pub squad: Option<String>,
    pub role: Option<String>,
    pub student_id: Option<String>,
    pub ai_assist: Option<String>,
    pub description: Option<String>,
    pub deliverables: Option<String>,
    pub acceptance_criteria: Option<String>,
    pub suggested_files: Option<String>,
    pub verification_command: Option<String>,
    pub suggested_branch: Option<String>,
    pub pr_title: Option<String>,
    pub reviewer: Option<String>,
    pub notes: Option<String>,
}

impl SeedRow {
    /// Creates an empty row at the given position.
    #[must_use]
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            ..Default::default()
        }
    }

    /// Seed id and title, when both are present.
    #[must_use]
    pub fn identity(&self) -> Option<(&str, &str)> {
        Some((self.seed_id.as_deref()?, self.task.as_deref()?))
    }
}

/// Normalizes a raw cell value: trims and maps blank to `None`.
pub(crate) fn present(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_requires_seed_and_task() {
        let mut row = SeedRow::new(1);
        assert_eq!(row.identity(), None);

        row.seed_id = Some("W1-01".into());
        assert_eq!(row.identity(), None);

        row.task = Some("Setup repo".into());
        assert_eq!(row.identity(), Some(("W1-01", "Setup repo")));
    }

    #[test]
    fn present_trims_and_drops_blank() {
        assert_eq!(present("  x "), Some("x".to_string()));
        assert_eq!(present(" \t"), None);
        assert_eq!(present(""), None);
    }
}
