use crate::normalize;
use crate::types::{NormalizedRow, RawRow, RowError};
use crate::validate;
use csv::ReaderBuilder;
use std::error::Error;

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub errors: Vec<RowError>,
}

/// Tokenize a CSV file into its header list and raw data rows.
///
/// The reader is flexible so rows with the wrong field count still come
/// through and get judged by validation instead of killing the read.
/// Fields are taken positionally; a wrong column order is caught by the
/// header check before any row is interpreted. Blank lines are skipped.
pub fn read_csv(path: &str) -> Result<(Vec<String>, Vec<RawRow>), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        rows.push(RawRow {
            date: record.get(0).unwrap_or("").to_string(),
            person: record.get(1).unwrap_or("").to_string(),
            miles_run: record.get(2).unwrap_or("").to_string(),
        });
    }
    Ok((headers, rows))
}

/// Full ingest path: read, validate, normalize.
///
/// Header failures and normalization failures are fatal and surface as
/// `Err`. Per-field findings are not: invalid rows are dropped, every
/// finding lands in the report, and the valid remainder is normalized.
pub fn load_and_clean(path: &str) -> Result<(Vec<NormalizedRow>, LoadReport), Box<dyn Error>> {
    let (headers, rows) = read_csv(path)?;
    let total_rows = rows.len();
    let result = validate::validate(&headers, rows);
    if let Some(msg) = result.header_error {
        return Err(msg.into());
    }
    let data = normalize::normalize_rows(&result.valid_rows)?;
    let report = LoadReport {
        total_rows,
        valid_rows: data.len(),
        errors: result.errors,
    };
    Ok((data, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate;
    use crate::types::Field;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn end_to_end_through_a_real_file() {
        let f = csv_file(
            "date,person,miles run\n\
             2024-01-15,John Smith,5.2\n\
             2024-01-17,Jane Doe,3.8\n\
             2024-01-18,John Smith,4.5\n",
        );
        let (data, report) = load_and_clean(f.path().to_str().unwrap()).unwrap();
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.valid_rows, 3);
        assert!(report.errors.is_empty());
        let miles: Vec<f64> = data.iter().map(|r| r.miles_run).collect();
        for (got, want) in miles.iter().zip([5.2, 3.8, 4.5]) {
            assert!((got - want).abs() < 1e-9);
        }

        let m = aggregate(&data);
        assert!((m.total_miles - 13.5).abs() < 1e-9);
        assert_eq!(m.total_runs, 3);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let f = csv_file("date,person,miles run\n2024-01-15,John Smith,5.2\n\n\n");
        let (data, report) = load_and_clean(f.path().to_str().unwrap()).unwrap();
        assert_eq!(report.total_rows, 1);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn wrong_headers_are_a_fatal_load_error() {
        let f = csv_file("person,date,miles run\nJohn Smith,2024-01-15,5.2\n");
        let err = load_and_clean(f.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Invalid headers"));
    }

    #[test]
    fn invalid_rows_are_reported_and_dropped() {
        let f = csv_file(
            "date,person,miles run\n\
             2024-01-15,John Smith,5.2\n\
             2024-01-16,Jane Doe,-1.0\n",
        );
        let (data, report) = load_and_clean(f.path().to_str().unwrap()).unwrap();
        assert_eq!(report.total_rows, 2);
        assert_eq!(data.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].row, 3);
        assert_eq!(report.errors[0].field, Field::MilesRun);
    }

    #[test]
    fn short_records_validate_as_missing_fields() {
        let f = csv_file("date,person,miles run\n2024-01-15,John Smith\n");
        let (data, report) = load_and_clean(f.path().to_str().unwrap()).unwrap();
        assert!(data.is_empty());
        // The missing third field fails the miles predicate.
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, Field::MilesRun);
    }
}
