// Utility helpers for parsing and formatting.
//
// This module centralizes all the "dirty" string/number/date handling so
// the rest of the code can assume clean, typed values.
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// The date formats a row may use, in the order they are tried.
pub const ACCEPTED_DATE_FORMATS: [&str; 3] = ["YYYY-MM-DD", "MM/DD/YYYY", "DD-MM-YYYY"];

// Shape pattern (`#` = ASCII digit) and chrono format string for each
// entry of ACCEPTED_DATE_FORMATS, same order.
const DATE_PATTERNS: [(&str, &str); 3] = [
    ("####-##-##", "%Y-%m-%d"),
    ("##/##/####", "%m/%d/%Y"),
    ("##-##-####", "%d-%m-%Y"),
];

fn matches_shape(s: &str, shape: &str) -> bool {
    if s.len() != shape.len() {
        return false;
    }
    s.bytes().zip(shape.bytes()).all(|(c, p)| {
        if p == b'#' {
            c.is_ascii_digit()
        } else {
            c == p
        }
    })
}

/// Parse a date string strictly against the accepted formats, first
/// match wins.
///
/// Strict means the input must have a format's exact shape: zero-padded
/// components and the right separators in the right positions. chrono
/// alone is too forgiving here (`"2024-1-5"` satisfies `%Y-%m-%d`), so
/// each format's shape is checked before chrono validates the calendar
/// values. `"2024-1-5"` matches no shape and is rejected; `"2024-13-05"`
/// matches a shape but is not a real date and is also rejected.
pub fn parse_date_strict(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for (shape, fmt) in DATE_PATTERNS {
        if !matches_shape(s, shape) {
            continue;
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse the leading numeric prefix of a string as `f64`.
///
/// This reproduces JavaScript's `parseFloat`: `"5.2abc"` parses to
/// `5.2`, `"abc"` and `""` parse to nothing. The prefix may carry a
/// sign, a decimal point, and a well-formed exponent. Deliberately
/// permissive; callers that want strict numbers should not use this.
pub fn parse_miles_lenient(s: &str) -> Option<f64> {
    let t = s.trim();
    let b = t.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut seen_digits = i > int_start;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        seen_digits = seen_digits || i > frac_start;
    }
    if !seen_digits {
        return None;
    }
    // Only consume an exponent if it is complete; "5e" stays "5".
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    t[..i].parse::<f64>().ok()
}

/// Render a miles value the way the dashboard table does: bare for whole
/// numbers, two decimals otherwise.
pub fn format_miles(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{:.2}", n)
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimal places plus locale-aware thousands separators
    // (e.g., `1,234,567.89`).
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_three_formats() {
        assert_eq!(parse_date_strict("2024-01-15"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date_strict("01/15/2024"), Some(date(2024, 1, 15)));
        assert_eq!(parse_date_strict("15-01-2024"), Some(date(2024, 1, 15)));
    }

    #[test]
    fn rejects_unpadded_date() {
        // chrono would accept this under %Y-%m-%d; the shape check must not.
        assert_eq!(parse_date_strict("2024-1-5"), None);
    }

    #[test]
    fn rejects_impossible_date() {
        assert_eq!(parse_date_strict("2024-13-05"), None);
        assert_eq!(parse_date_strict("32-01-2024"), None);
    }

    #[test]
    fn rejects_empty_and_garbage_dates() {
        assert_eq!(parse_date_strict(""), None);
        assert_eq!(parse_date_strict("   "), None);
        assert_eq!(parse_date_strict("yesterday"), None);
        assert_eq!(parse_date_strict("2024/01/15"), None);
    }

    #[test]
    fn day_first_format_wins_for_dash_short_shape() {
        // `##-##-####` only matches DD-MM-YYYY, so this is February 1st.
        assert_eq!(parse_date_strict("01-02-2024"), Some(date(2024, 2, 1)));
    }

    #[test]
    fn lenient_miles_takes_numeric_prefix() {
        assert_eq!(parse_miles_lenient("5.2"), Some(5.2));
        assert_eq!(parse_miles_lenient("5.2abc"), Some(5.2));
        assert_eq!(parse_miles_lenient(" 7 "), Some(7.0));
        assert_eq!(parse_miles_lenient("-1.0"), Some(-1.0));
        assert_eq!(parse_miles_lenient(".5"), Some(0.5));
        assert_eq!(parse_miles_lenient("1e2"), Some(100.0));
    }

    #[test]
    fn lenient_miles_rejects_non_numeric() {
        assert_eq!(parse_miles_lenient("abc"), None);
        assert_eq!(parse_miles_lenient(""), None);
        assert_eq!(parse_miles_lenient("."), None);
        assert_eq!(parse_miles_lenient("-"), None);
    }

    #[test]
    fn incomplete_exponent_is_not_consumed() {
        assert_eq!(parse_miles_lenient("5e"), Some(5.0));
        assert_eq!(parse_miles_lenient("5e+"), Some(5.0));
    }

    #[test]
    fn miles_formatting() {
        assert_eq!(format_miles(5.0), "5");
        assert_eq!(format_miles(5.2), "5.20");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-12.5, 2), "-12.50");
        assert_eq!(format_int(9855usize), "9,855");
    }
}
