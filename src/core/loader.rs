use crate::domain::model::{LoadReport, RawRecord, TrademarkRecord};
use crate::utils::error::{Result, TrademarkError};
use serde_json::Value;

/// Turn raw records into a snapshot, skipping the ones that fail validation.
///
/// Input order is preserved. A bad record is logged and counted, never fatal.
pub fn load(raw_records: &[RawRecord]) -> LoadReport {
    let mut report = LoadReport {
        records: Vec::with_capacity(raw_records.len()),
        skipped: 0,
    };

    for (index, raw) in raw_records.iter().enumerate() {
        match TrademarkRecord::try_from(raw) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                tracing::warn!(index, reason = %e, "Skipping invalid trademark record");
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        "Loaded {} of {} trademark records ({} skipped)",
        report.records.len(),
        report.total(),
        report.skipped
    );

    report
}

/// Parse a whole document; the top level must be a JSON array.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| TrademarkError::source_unavailable(format!("invalid JSON document: {}", e)))?;

    match document {
        Value::Array(items) => Ok(items),
        other => Err(TrademarkError::source_unavailable(format!(
            "expected a JSON array of records, found {}",
            match other {
                Value::Object(_) => "an object",
                Value::String(_) => "a string",
                Value::Number(_) => "a number",
                Value::Bool(_) => "a boolean",
                _ => "null",
            }
        ))),
    }
}
