use crate::JobRecord;

/// One record paired with its precomputed lowercase search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableJob {
    pub job: JobRecord,
    pub text: String,
}

/// Precomputed search text per record, so repeated filtering never
/// re-normalizes on a keystroke.
///
/// The index is rebuilt only when the record collection itself is replaced;
/// `revision` stamps each rebuild and doubles as the memoization key for
/// anything derived from the index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchIndex {
    entries: Vec<SearchableJob>,
    revision: u64,
}

impl SearchIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the indexed collection, preserving feed order.
    pub fn rebuild(&mut self, jobs: &[JobRecord]) {
        self.entries = jobs
            .iter()
            .map(|job| SearchableJob {
                job: job.clone(),
                text: searchable_text(job),
            })
            .collect();
        self.revision += 1;
    }

    pub fn entries(&self) -> &[SearchableJob] {
        &self.entries
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Case-folded concatenation of the record's searchable fields,
/// space-separated, with empty fields omitted.
fn searchable_text(job: &JobRecord) -> String {
    [
        job.title.as_str(),
        job.company.as_str(),
        job.location.as_str(),
        job.tags.as_str(),
        job.source.as_str(),
        job.salary_raw.as_str(),
    ]
    .iter()
    .filter(|field| !field.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}
