//! Query-string flattening for query objects and ad-hoc parameters.
//!
//! A query object is any `Serialize` struct. It is flattened through
//! `serde_json::Value` (with `preserve_order`, so pairs come out in declared
//! field order), unset fields and empty strings are dropped, and the remaining
//! pairs are form-urlencoded.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ActivitiError, Result};

/// Flatten `query` into ordered key/value pairs, skipping null and empty values.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(query).map_err(ActivitiError::Serialization)?;
    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    let pairs = map
        .into_iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => other.to_string(),
            };
            (!rendered.is_empty()).then_some((key, rendered))
        })
        .collect();
    Ok(pairs)
}

/// Encode pairs as `application/x-www-form-urlencoded`.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
