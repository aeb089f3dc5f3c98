use serde::Deserialize;

/// One job posting as received from the feed.
///
/// Every field defaults when absent so a sparse feed entry still
/// deserializes. Records are replaced wholesale on each successful load,
/// never merged; `url` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub url: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary_raw: String,
    pub salary_min_usd: Option<u32>,
    pub salary_max_usd: Option<u32>,
    pub source: String,
    pub posted_date: String,
    pub discovered_date: String,
    pub is_remote_us: bool,
    /// Comma-separated tag list, split lazily for display.
    pub tags: String,
}
