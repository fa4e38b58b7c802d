// Entry point and high-level CLI flow.
//
// Console port of the CSV Runner dashboard:
// - Option [1] loads a CSV of runs, validates and normalizes it.
// - Option [2] generates the per-person and daily reports plus a JSON
//   metrics summary.
// - Option [3] writes a sample CSV in the expected shape.
// After generating reports, the user can go back to the menu or exit.
mod loader;
mod metrics;
mod normalize;
mod output;
mod reports;
mod types;
mod util;
mod validate;

use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;
use types::NormalizedRow;

// In-memory app state so the CSV is loaded once but reports can be
// regenerated multiple times in a single run. Replaced wholesale on
// every successful load.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<Vec<NormalizedRow>>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask for the CSV path, defaulting to `runs.csv` on empty input.
fn read_path() -> String {
    print!("CSV file path [runs.csv]: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    let trimmed = buf.trim();
    if trimmed.is_empty() {
        "runs.csv".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ask the user whether to go back to the report selection menu after
/// generating reports.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Report Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load, validate, and normalize a CSV of runs.
///
/// On success the normalized rows land in `APP_STATE`; a failed load
/// (bad path, bad headers, normalization failure) leaves any previously
/// loaded data in place.
fn handle_load() {
    let path = read_path();
    if !path.to_lowercase().ends_with(".csv") {
        eprintln!("Error: '{}' is not a CSV file.\n", path);
        return;
    }
    match loader::load_and_clean(&path) {
        Ok((data, report)) => {
            println!(
                "Processing dataset... ({} rows read, {} valid)",
                util::format_int(report.total_rows as i64),
                util::format_int(report.valid_rows as i64)
            );
            output::print_row_errors(&report.errors);
            println!("");
            let mut state = APP_STATE.lock().unwrap();
            state.data = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

/// Handle option [2]: generate both reports and the JSON summary.
///
/// This function is intentionally side-effectful:
/// - writes two report CSVs and the cleaned dataset,
/// - writes a JSON metrics summary,
/// - and prints Markdown previews of each table to the console.
fn handle_generate_reports() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load a CSV file first (option 1).\n");
        return;
    };

    println!("Generating reports...");
    println!("Outputs saved to individual files...\n");

    let dashboard = metrics::aggregate(&data);

    let r1 = reports::person_summary_rows(&dashboard);
    let file1 = "report1_person_summary.csv";
    if let Err(e) = output::write_csv(file1, &r1) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 1: Per-Person Mileage Summary\n");
    output::preview_table_rows(&r1, 10);
    println!("(Full table exported to {})\n", file1);

    let r2 = reports::daily_total_rows(&data);
    let file2 = "report2_daily_mileage.csv";
    if let Err(e) = output::write_csv(file2, &r2) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 2: Daily Mileage Trend\n");
    output::preview_table_rows(&r2, 10);
    println!("(Full table exported to {})\n", file2);

    let runs = reports::run_rows(&data);
    let file3 = "runs_clean.csv";
    if let Err(e) = output::write_csv(file3, &runs) {
        eprintln!("Write error: {}", e);
    }
    println!("Cleaned runs ({} rows):\n", util::format_int(runs.len() as i64));
    output::preview_table_rows(&runs, 3);
    println!("(Full dataset exported to {})\n", file3);

    if let Err(e) = output::write_json("summary.json", &dashboard) {
        eprintln!("Write error: {}", e);
    }
    println!("Summary Stats (summary.json):");
    println!(
        "{{\"totalMiles\": {}, \"totalRuns\": {}, \"averageMilesPerRun\": {}}}\n",
        util::format_number(dashboard.total_miles, 2),
        util::format_int(dashboard.total_runs as i64),
        util::format_number(dashboard.average_miles_per_run, 2)
    );
}

/// Handle option [3]: write a sample CSV the user can start from.
fn handle_sample() {
    let path = "sample_runs.csv";
    match output::write_sample_csv(path) {
        Ok(()) => println!("Sample file written to {}.\n", path),
        Err(e) => eprintln!("Write error: {}\n", e),
    }
}

fn main() {
    loop {
        println!("CSV Runner Dashboard");
        println!("[1] Load a CSV file");
        println!("[2] Generate reports");
        println!("[3] Write a sample CSV\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!("");
                handle_generate_reports();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            "3" => {
                handle_sample();
            }
            _ => {
                println!("Invalid choice. Please enter 1, 2, or 3.\n");
            }
        }
    }
}
