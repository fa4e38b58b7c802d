use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tabled::Tabled;

/// One tokenized data row, fields still in their raw string form.
///
/// Built positionally by the loader after the CSV reader has split the
/// line; the validator decides whether it is usable. A `RawRow` never
/// crosses the normalization boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub date: String,
    pub person: String,
    pub miles_run: String,
}

/// A validated, typed activity record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRow {
    pub date: NaiveDate,
    pub person: String,
    pub miles_run: f64,
}

/// The column a validation finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Person,
    MilesRun,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Date => write!(f, "date"),
            Field::Person => write!(f, "person"),
            Field::MilesRun => write!(f, "miles run"),
        }
    }
}

/// One per-field validation finding.
///
/// `row` is 1-based counting the header as row 1, so the first data row
/// reports row 2. A single data row can produce up to three of these.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub field: Field,
    pub message: String,
}

/// Outcome of a full validation pass.
///
/// If `header_error` is set the headers did not match and no row was
/// examined: `valid_rows` and `errors` are both empty.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid_rows: Vec<RawRow>,
    pub errors: Vec<RowError>,
    pub header_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonMetrics {
    pub person: String,
    pub total_miles: f64,
    pub run_count: usize,
    pub average_miles: f64,
    pub min_miles: f64,
    pub max_miles: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_miles: f64,
    pub total_runs: usize,
    pub average_miles_per_run: f64,
    pub min_miles: f64,
    pub max_miles: f64,
    pub run_by_person: Vec<PersonMetrics>,
}

// Display/export rows. Metric values are pre-formatted strings so the
// console table and the exported CSV show identical cells.

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RunRow {
    #[serde(rename = "Date")]
    #[tabled(rename = "Date")]
    pub date: String,
    #[serde(rename = "Person")]
    #[tabled(rename = "Person")]
    pub person: String,
    #[serde(rename = "MilesRun")]
    #[tabled(rename = "MilesRun")]
    pub miles_run: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PersonSummaryRow {
    #[serde(rename = "Person")]
    #[tabled(rename = "Person")]
    pub person: String,
    #[serde(rename = "Runs")]
    #[tabled(rename = "Runs")]
    pub runs: usize,
    #[serde(rename = "TotalMiles")]
    #[tabled(rename = "TotalMiles")]
    pub total_miles: String,
    #[serde(rename = "AvgMiles")]
    #[tabled(rename = "AvgMiles")]
    pub avg_miles: String,
    #[serde(rename = "MinMiles")]
    #[tabled(rename = "MinMiles")]
    pub min_miles: String,
    #[serde(rename = "MaxMiles")]
    #[tabled(rename = "MaxMiles")]
    pub max_miles: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DailyTotalRow {
    #[serde(rename = "Date")]
    #[tabled(rename = "Date")]
    pub date: String,
    #[serde(rename = "Runs")]
    #[tabled(rename = "Runs")]
    pub runs: usize,
    #[serde(rename = "TotalMiles")]
    #[tabled(rename = "TotalMiles")]
    pub total_miles: String,
}
