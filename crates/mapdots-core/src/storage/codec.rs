//! Serialized form of the dots slot
//!
//! The slot holds one JSON array of dot records and nothing else. There is
//! no schema version: anything that fails to decode as a whole is treated
//! by the store as "no stored data".

use std::collections::HashSet;

use crate::models::Dot;

use super::error::{StorageError, StorageResult};

/// Serialize dots into the slot payload
pub fn encode_dots(dots: &[Dot]) -> StorageResult<String> {
    Ok(serde_json::to_string(dots)?)
}

/// Parse a slot payload
///
/// Returns `Ok(None)` for an empty payload or a literal `null`. Any shape
/// error or duplicate id fails the whole payload. Coordinates outside
/// `0..=100` are clamped.
pub fn decode_dots(payload: &str) -> StorageResult<Option<Vec<Dot>>> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Ok(None);
    }

    let Some(mut dots) = serde_json::from_str::<Option<Vec<Dot>>>(payload)? else {
        return Ok(None);
    };

    let mut seen = HashSet::with_capacity(dots.len());
    for dot in &mut dots {
        if !seen.insert(dot.id.clone()) {
            return Err(StorageError::DuplicateId(dot.id.clone()));
        }
        dot.set_position(dot.x, dot.y);
    }

    Ok(Some(dots))
}
