use crate::FetchGeneration;

/// Side effects requested by the update function and applied by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cancel the in-flight feed load, if any.
    CancelFetch,
    /// Start a feed load stamped with this generation.
    StartFetch { generation: FetchGeneration },
    /// Rewrite the location's query string in place (no history entry).
    ReflectUrl { query_string: String },
}
