use url::form_urlencoded;

use crate::FilterState;

/// Host-side view of the current location's query string.
///
/// The core never touches a browser-style location object directly; the
/// driver injects whatever store fits its environment. `replace_query`
/// must overwrite the current location in place rather than pushing a new
/// history entry.
pub trait UrlStore {
    /// Current query string, without the leading `?`.
    fn query_string(&self) -> String;
    /// Replaces the current query string in place.
    fn replace_query(&mut self, query: &str);
}

/// In-memory store used by tests and the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryUrlStore {
    query: String,
}

impl MemoryUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl UrlStore for MemoryUrlStore {
    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_string();
    }
}

/// Seeds filter state from a query string, once, at startup.
///
/// `q` seeds the text query when present and non-empty; `remote` seeds the
/// remote-only flag when it is the literal `1`. Anything else leaves the
/// defaults untouched.
pub fn hydrate(query_string: &str) -> FilterState {
    let mut filter = FilterState::default();
    for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
        match key.as_ref() {
            "q" if !value.is_empty() => filter.query = value.into_owned(),
            "remote" if value == "1" => filter.remote_only = true,
            _ => {}
        }
    }
    filter
}

/// Serializes filter state back into a query string.
///
/// Parameters are omitted when they carry no information: no `q` for an
/// empty query, no `remote` unless the flag is set. An unfiltered state
/// serializes to the empty string.
pub fn reflect(filter: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !filter.query.is_empty() {
        serializer.append_pair("q", &filter.query);
    }
    if filter.remote_only {
        serializer.append_pair("remote", "1");
    }
    serializer.finish()
}
