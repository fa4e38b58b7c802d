// Header and per-row validation.
//
// Header mismatches are fatal: nothing below a wrong header line can be
// trusted, so no row is examined. Field failures are local: the row is
// dropped, the finding is recorded, and validation moves on.
use crate::types::{Field, RawRow, RowError, ValidationResult};
use crate::util::{parse_date_strict, parse_miles_lenient, ACCEPTED_DATE_FORMATS};

/// The exact column set an uploaded file must carry, in order.
pub const EXPECTED_HEADERS: [&str; 3] = ["date", "person", "miles run"];

fn is_valid_date(s: &str) -> bool {
    parse_date_strict(s).is_some()
}

fn is_valid_person(s: &str) -> bool {
    !s.trim().is_empty()
}

fn is_valid_miles(s: &str) -> bool {
    matches!(parse_miles_lenient(s), Some(v) if v >= 0.0)
}

/// Validate headers, then partition `rows` into valid rows and per-field
/// findings.
///
/// Headers are compared position-sensitively after trimming and
/// lowercasing, so `"Date"` and `" MILES RUN "` are fine but a missing,
/// extra, or reordered column is not. A header mismatch short-circuits:
/// the result carries only `header_error`.
///
/// Row numbers in findings count the header as row 1; the first data row
/// is row 2. For each failing row the findings appear in column order
/// (date, person, miles run). Valid rows keep their original relative
/// order.
pub fn validate(headers: &[String], rows: Vec<RawRow>) -> ValidationResult {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    if normalized != EXPECTED_HEADERS {
        return ValidationResult {
            valid_rows: Vec::new(),
            errors: Vec::new(),
            header_error: Some(format!(
                "Invalid headers. Expected: {}. Got: {}",
                EXPECTED_HEADERS.join(", "),
                headers.join(", ")
            )),
        };
    }

    let mut valid_rows = Vec::new();
    let mut errors = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
        // +2: one for the 0-based index, one for the header row.
        let row_number = index + 2;
        let before = errors.len();

        if !is_valid_date(&row.date) {
            errors.push(RowError {
                row: row_number,
                field: Field::Date,
                message: format!(
                    "Invalid date format. Accepted formats: {}",
                    ACCEPTED_DATE_FORMATS.join(", ")
                ),
            });
        }
        if !is_valid_person(&row.person) {
            errors.push(RowError {
                row: row_number,
                field: Field::Person,
                message: "Person cannot be empty".to_string(),
            });
        }
        if !is_valid_miles(&row.miles_run) {
            errors.push(RowError {
                row: row_number,
                field: Field::MilesRun,
                message: "Miles must be a number >= 0".to_string(),
            });
        }

        if errors.len() == before {
            valid_rows.push(row);
        }
    }

    ValidationResult {
        valid_rows,
        errors,
        header_error: None,
    }
}
