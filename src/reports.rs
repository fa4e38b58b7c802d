// Report row builders.
//
// These shape normalized rows and dashboard metrics into display rows
// for the console tables and CSV exports. Cell values are formatted
// here; the aggregation itself lives in `metrics`.
use crate::types::{DailyTotalRow, DashboardMetrics, NormalizedRow, PersonSummaryRow, RunRow};
use crate::util::format_miles;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Report 1: one row per person, in the aggregator's first-appearance
/// order.
pub fn person_summary_rows(metrics: &DashboardMetrics) -> Vec<PersonSummaryRow> {
    metrics
        .run_by_person
        .iter()
        .map(|p| PersonSummaryRow {
            person: p.person.clone(),
            runs: p.run_count,
            total_miles: format_miles(p.total_miles),
            avg_miles: format_miles(p.average_miles),
            min_miles: format_miles(p.min_miles),
            max_miles: format_miles(p.max_miles),
        })
        .collect()
}

/// Report 2: miles per calendar day, ascending by date.
pub fn daily_total_rows(rows: &[NormalizedRow]) -> Vec<DailyTotalRow> {
    // BTreeMap gives the date-sorted order the trend table wants.
    let mut by_date: BTreeMap<NaiveDate, (usize, f64)> = BTreeMap::new();
    for r in rows {
        let e = by_date.entry(r.date).or_insert((0, 0.0));
        e.0 += 1;
        e.1 += r.miles_run;
    }
    by_date
        .into_iter()
        .map(|(date, (runs, total))| DailyTotalRow {
            date: date.format("%Y-%m-%d").to_string(),
            runs,
            total_miles: format_miles(total),
        })
        .collect()
}

/// The cleaned dataset, one display row per normalized run.
///
/// Dates render `MM/DD/YYYY` and whole-number miles render bare, the way
/// the dashboard's raw table shows them.
pub fn run_rows(rows: &[NormalizedRow]) -> Vec<RunRow> {
    rows.iter()
        .map(|r| RunRow {
            date: r.date.format("%m/%d/%Y").to_string(),
            person: r.person.clone(),
            miles_run: format_miles(r.miles_run),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate;
    use chrono::NaiveDate;

    fn run(date: (i32, u32, u32), person: &str, miles: f64) -> NormalizedRow {
        NormalizedRow {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            person: person.to_string(),
            miles_run: miles,
        }
    }

    #[test]
    fn person_summary_keeps_aggregator_order_and_formats_cells() {
        let rows = vec![
            run((2024, 1, 15), "John Smith", 5.2),
            run((2024, 1, 17), "Jane Doe", 3.8),
            run((2024, 1, 18), "John Smith", 4.5),
        ];
        let table = person_summary_rows(&aggregate(&rows));
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].person, "John Smith");
        assert_eq!(table[0].runs, 2);
        assert_eq!(table[0].total_miles, "9.70");
        assert_eq!(table[0].avg_miles, "4.85");
        assert_eq!(table[1].person, "Jane Doe");
        assert_eq!(table[1].runs, 1);
    }

    #[test]
    fn daily_totals_group_and_sort_by_date() {
        let rows = vec![
            run((2024, 1, 18), "John Smith", 4.5),
            run((2024, 1, 15), "John Smith", 5.2),
            run((2024, 1, 15), "Jane Doe", 3.8),
        ];
        let table = daily_total_rows(&rows);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].date, "2024-01-15");
        assert_eq!(table[0].runs, 2);
        assert_eq!(table[0].total_miles, "9");
        assert_eq!(table[1].date, "2024-01-18");
        assert_eq!(table[1].runs, 1);
    }

    #[test]
    fn run_rows_format_like_the_raw_table() {
        let rows = vec![run((2024, 1, 15), "John Smith", 5.0)];
        let table = run_rows(&rows);
        assert_eq!(table[0].date, "01/15/2024");
        assert_eq!(table[0].miles_run, "5");
    }
}
