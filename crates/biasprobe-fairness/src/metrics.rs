//! Parity and impact metrics.

use biasprobe_store::{Column, DatasetRow};

/// Share of rows whose `column` equals `value`. `0.0` on an empty table.
pub fn demographic_parity(rows: &[DatasetRow], value: &str, column: Column) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let favorable = rows.iter().filter(|r| r.get(column) == value).count();
    favorable as f64 / rows.len() as f64
}

/// Share of `nationality` rows labeled `gender`. `0.0` when the nationality
/// has no rows.
pub fn selection_rate(rows: &[DatasetRow], nationality: &str, gender: &str) -> f64 {
    let (total, favorable) = rows
        .iter()
        .filter(|r| r.inferred_nationality == nationality)
        .fold((0usize, 0usize), |(total, favorable), r| {
            (total + 1, favorable + usize::from(r.inferred_gender == gender))
        });
    if total == 0 {
        0.0
    } else {
        favorable as f64 / total as f64
    }
}

/// `rate(nationality_a) / rate(nationality_b)` for one gender; `None` when
/// the denominator rate is zero.
pub fn disparate_impact(
    rows: &[DatasetRow],
    nationality_a: &str,
    nationality_b: &str,
    gender: &str,
) -> Option<f64> {
    let rate_b = selection_rate(rows, nationality_b, gender);
    if rate_b == 0.0 {
        return None;
    }
    Some(selection_rate(rows, nationality_a, gender) / rate_b)
}

/// Distinct values of a column in first-appearance order.
pub fn unique_values(rows: &[DatasetRow], column: Column) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        let value = row.get(column);
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
