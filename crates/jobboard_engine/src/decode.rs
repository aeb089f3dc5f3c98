use board_logging::board_warn;
use jobboard_core::JobRecord;
use serde_json::Value;

use crate::FeedError;

/// Parses the feed payload.
///
/// A payload that is valid JSON but not an array is coerced to an empty
/// collection instead of an error. That leniency can hide a misbehaving
/// backend, so the coercion is logged at warn level.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<JobRecord>, FeedError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| FeedError::Malformed(err.to_string()))?;
    match value {
        Value::Array(_) => {
            serde_json::from_value(value).map_err(|err| FeedError::Malformed(err.to_string()))
        }
        other => {
            board_warn!(
                "feed payload is not an array (got {}), treating as empty",
                json_kind(&other)
            );
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
