// Dashboard metric aggregation.
use crate::types::{DashboardMetrics, NormalizedRow, PersonMetrics};
use std::collections::HashMap;

/// Aggregate normalized rows into overall and per-person statistics.
///
/// One pass over the rows. A person's accumulator is created on first
/// sight with min = max = that row's miles, so no infinity sentinels are
/// needed; ties leave the stored extremum alone. `run_by_person` keeps
/// first-appearance order, which `HashMap` iteration would not, so the
/// map only stores indexes into an ordered `Vec`.
///
/// The empty row set yields all zeros and an empty `run_by_person`.
pub fn aggregate(rows: &[NormalizedRow]) -> DashboardMetrics {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut run_by_person: Vec<PersonMetrics> = Vec::new();

    for row in rows {
        let i = match index.get(&row.person) {
            Some(&i) => i,
            None => {
                run_by_person.push(PersonMetrics {
                    person: row.person.clone(),
                    total_miles: 0.0,
                    run_count: 0,
                    average_miles: 0.0,
                    min_miles: row.miles_run,
                    max_miles: row.miles_run,
                });
                index.insert(row.person.clone(), run_by_person.len() - 1);
                run_by_person.len() - 1
            }
        };
        let m = &mut run_by_person[i];
        m.total_miles += row.miles_run;
        m.run_count += 1;
        if row.miles_run < m.min_miles {
            m.min_miles = row.miles_run;
        }
        if row.miles_run > m.max_miles {
            m.max_miles = row.miles_run;
        }
    }

    for m in &mut run_by_person {
        // run_count >= 1 for every entry by construction.
        m.average_miles = m.total_miles / m.run_count as f64;
    }

    let total_runs = rows.len();
    let total_miles: f64 = rows.iter().map(|r| r.miles_run).sum();
    let average_miles_per_run = if total_runs > 0 {
        total_miles / total_runs as f64
    } else {
        0.0
    };
    let mut min_miles = 0.0;
    let mut max_miles = 0.0;
    if let Some(first) = rows.first() {
        min_miles = first.miles_run;
        max_miles = first.miles_run;
        for r in &rows[1..] {
            if r.miles_run < min_miles {
                min_miles = r.miles_run;
            }
            if r.miles_run > max_miles {
                max_miles = r.miles_run;
            }
        }
    }

    DashboardMetrics {
        total_miles,
        total_runs,
        average_miles_per_run,
        min_miles,
        max_miles,
        run_by_person,
    }
}
