// Conversion of validated raw rows into typed records.
use crate::types::{NormalizedRow, RawRow};
use crate::util::{parse_date_strict, parse_miles_lenient};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("invalid date {value:?}: accepted formats are YYYY-MM-DD, MM/DD/YYYY, DD-MM-YYYY")]
    InvalidDate { value: String },
    #[error("error normalizing row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<NormalizeError>,
    },
}

/// Convert one raw row to a typed record.
///
/// The date is parsed strictly against the accepted formats in their
/// fixed order, first match wins. The person is trimmed. Miles use the
/// same lenient prefix parse as validation, with anything unparseable
/// coercing to `0.0` rather than failing. An unparseable date is the
/// only error case.
pub fn normalize_row(row: &RawRow) -> Result<NormalizedRow, NormalizeError> {
    let date = parse_date_strict(&row.date).ok_or_else(|| NormalizeError::InvalidDate {
        value: row.date.clone(),
    })?;
    Ok(NormalizedRow {
        date,
        person: row.person.trim().to_string(),
        miles_run: parse_miles_lenient(&row.miles_run).unwrap_or(0.0),
    })
}

/// Normalize a batch of rows, failing fast on the first bad one.
///
/// The rows are expected to have passed validation already, so a failure
/// here means the caller fed in something the validator never saw. There
/// are no partial results: the error names the 1-based index of the row
/// within the batch and carries the underlying cause, and nothing is
/// silently dropped.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<NormalizedRow>, NormalizeError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            normalize_row(row).map_err(|e| NormalizeError::Row {
                row: index + 1,
                source: Box::new(e),
            })
        })
        .collect()
}
