use crate::{JobRecord, SearchIndex};

/// Applies the remote-only and free-text filters over the index.
///
/// The query is trimmed and case-folded, then matched as an exact
/// contiguous substring of each record's search text. Output preserves
/// index order; no scoring, no resorting.
pub fn filter_jobs(index: &SearchIndex, query: &str, remote_only: bool) -> Vec<JobRecord> {
    let needle = query.trim().to_lowercase();
    index
        .entries()
        .iter()
        .filter(|entry| !remote_only || entry.job.is_remote_us)
        .filter(|entry| needle.is_empty() || entry.text.contains(&needle))
        .map(|entry| entry.job.clone())
        .collect()
}
