use limbu_core::RawRecord;
use serde_json::Value;

use crate::error::LoadError;

/// Decode the upstream payload, a top-level JSON array of word records.
///
/// Elements that are not records are skipped; only a payload that is not an
/// array at all is an error.
pub fn decode_records(json: &str) -> Result<Vec<RawRecord>, LoadError> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(items) = value else {
        return Err(LoadError::InvalidFormat(
            "expected a JSON array of records".to_string(),
        ));
    };

    let total = items.len();
    let records: Vec<RawRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Skipping undecodable record #{}: {}", position, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            "Skipped {} of {} undecodable dictionary records",
            total - records.len(),
            total
        );
    }

    Ok(records)
}
