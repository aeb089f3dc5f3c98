use crate::JobRecord;

/// Everything the display layer needs for one frame. The display layer is
/// purely a consumer; it performs no filtering of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobsViewModel {
    pub loading: bool,
    pub error: Option<String>,
    pub jobs: Vec<JobRowView>,
    pub total_count: usize,
    /// Raw query as typed, for echoing in the input line.
    pub query: String,
    pub remote_only: bool,
    /// Query string encoding the settled filter, for bookmarking/sharing.
    pub share_query_string: String,
    pub dirty: bool,
}

/// Display-ready projection of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub source: String,
    pub salary_label: String,
    pub tags: Vec<String>,
    pub is_remote_us: bool,
    pub discovered_date: String,
    pub url: String,
}

impl JobRowView {
    pub fn from_record(job: &JobRecord) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            source: job.source.clone(),
            salary_label: salary_label(job),
            tags: split_tags(&job.tags),
            is_remote_us: job.is_remote_us,
            discovered_date: job.discovered_date.clone(),
            url: job.url.clone(),
        }
    }
}

/// Compact salary label: `$120k-$150k` for a full range, `$120k+` for a
/// floor only, otherwise the raw feed text (possibly empty).
fn salary_label(job: &JobRecord) -> String {
    match (job.salary_min_usd, job.salary_max_usd) {
        (Some(min), Some(max)) => format!("${}k-${}k", round_k(min), round_k(max)),
        (Some(min), None) => format!("${}k+", round_k(min)),
        _ => job.salary_raw.clone(),
    }
}

fn round_k(usd: u32) -> u32 {
    (f64::from(usd) / 1000.0).round() as u32
}

/// Splits the comma-separated tag field, trimming and dropping empties.
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
