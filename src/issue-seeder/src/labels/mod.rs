//! Categorization labels and idempotent label creation.

mod definition;

pub use definition::LabelSpec;

use crate::config::LabelColors;
use crate::sheet::SeedRow;
use crate::tracker::{LabelLookup, Tracker, TrackerError};
use tracing::{debug, info};

/// Prefix of the label binding an issue to its spreadsheet row.
pub const SEED_LABEL_PREFIX: &str = "seed:";

/// Name of the seed label for `seed_id`.
#[must_use]
pub fn seed_label(seed_id: &str) -> String {
    format!("{SEED_LABEL_PREFIX}{seed_id}")
}

/// Creates `label` unless a label with the same name already exists.
///
/// # Errors
///
/// Returns [`TrackerError`] if the existence check fails for a reason other
/// than "not found", or if creation fails.
pub async fn ensure_label(tracker: &dyn Tracker, label: &LabelSpec) -> Result<(), TrackerError> {
    match tracker.get_label(&label.name).await? {
        LabelLookup::Found => {
            debug!(label = %label.name, "Label exists");
        }
        LabelLookup::NotFound => {
            info!(label = %label.name, color = %label.color, "Creating label");
            tracker.create_label(label).await?;
        }
    }
    Ok(())
}

/// Derives the per-row labels, in a fixed order, ending with the seed label.
///
/// A candidate whose value is absent is left out entirely.
#[must_use]
pub fn dynamic_labels(row: &SeedRow, colors: &LabelColors) -> Vec<LabelSpec> {
    let candidates = [
        ("Semana:", &row.week, &colors.week),
        ("SQUAD:", &row.squad, &colors.squad),
        ("Papel:", &row.role, &colors.role),
        ("IA:", &row.ai_assist, &colors.ai_assist),
        ("IdAluno:", &row.student_id, &colors.student),
        (SEED_LABEL_PREFIX, &row.seed_id, &colors.seed),
    ];

    candidates
        .into_iter()
        .filter_map(|(prefix, value, color)| {
            value
                .as_deref()
                .map(|value| LabelSpec::new(format!("{prefix}{value}"), color.clone()))
        })
        .collect()
}
