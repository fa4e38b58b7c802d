use crate::types::RowError;
use crate::util::format_int;
use serde::Serialize;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

/// How many validation findings to print before summarizing the rest.
/// Display cap only; the load report always carries every finding.
pub const ERROR_DISPLAY_LIMIT: usize = 10;

pub fn write_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

/// Print validation findings, capped at [`ERROR_DISPLAY_LIMIT`] with a
/// `... and K more` tail.
pub fn print_row_errors(errors: &[RowError]) {
    if errors.is_empty() {
        return;
    }
    println!(
        "Found {} validation error(s). Valid rows have been accepted; invalid rows are listed below.",
        format_int(errors.len())
    );
    for err in errors.iter().take(ERROR_DISPLAY_LIMIT) {
        println!("  Row {} - {}: {}", err.row, err.field, err.message);
    }
    if errors.len() > ERROR_DISPLAY_LIMIT {
        println!(
            "  ... and {} more error(s)",
            format_int(errors.len() - ERROR_DISPLAY_LIMIT)
        );
    }
    println!("");
}

/// Write a small, well-formed sample file a user can download and edit.
/// Covers all three accepted date formats.
pub fn write_sample_csv(path: &str) -> Result<(), Box<dyn Error>> {
    let sample = "date,person,miles run\n\
                  2024-01-15,John Smith,5.2\n\
                  01/17/2024,Jane Doe,3.8\n\
                  18-01-2024,John Smith,4.5\n\
                  2024-01-20,Jane Doe,6\n";
    std::fs::write(path, sample)?;
    Ok(())
}
