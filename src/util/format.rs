//! Number formatting for stat tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Fantasy points with one decimal, e.g. `1456.7`.
pub fn points(value: f64) -> String {
    format!("{value:.1}")
}

/// Optional points, `—` when the API has none.
pub fn points_or_dash(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_owned(), points)
}

/// Percentage for a 0..=100 value, rounded to a whole number.
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| format!("{:.0}%", v.clamp(0.0, 100.0)))
}

/// Ordinal suffix for playoff seeds: `1st`, `2nd`, `11th`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
