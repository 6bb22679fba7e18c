//! Seed lookup and issue content.
//!
//! An issue belongs to a spreadsheet row when it carries the row's seed label.
//! Lookup pages through the plain issue listing filtered by that label rather
//! than the search API, which token-scoped callers may not be allowed to use.

mod body;

pub use body::{build_body, marker_seed_id, seed_marker};

use crate::labels::seed_label;
use crate::tracker::{TrackedIssue, Tracker, TrackerError};
use tracing::{debug, info_span, Instrument};

/// Finds the issue seeded from `seed_id`, if one exists.
///
/// Pull requests are skipped, and only an issue whose labels contain the seed
/// label exactly is accepted. Paging stops at an empty page or one shorter
/// than `page_size`.
///
/// # Errors
///
/// Returns [`TrackerError`] if a listing request fails.
pub async fn find_by_seed(
    tracker: &dyn Tracker,
    seed_id: &str,
    page_size: u8,
) -> Result<Option<TrackedIssue>, TrackerError> {
    let label = seed_label(seed_id);
    let span = info_span!("find_by_seed", label = %label);

    async {
        let mut page = 1u32;
        loop {
            let items = tracker.list_issues(&label, page, page_size).await?;
            debug!(page, count = items.len(), "Fetched issue page");

            if items.is_empty() {
                return Ok(None);
            }

            let page_len = items.len();
            if let Some(found) = items
                .into_iter()
                .find(|item| !item.is_pull_request && item.has_label(&label))
            {
                debug!(issue_number = found.number, "Found seeded issue");
                return Ok(Some(found));
            }

            if page_len < usize::from(page_size) {
                return Ok(None);
            }
            page += 1;
        }
    }
    .instrument(span)
    .await
}
