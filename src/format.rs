//! Display formatting for amounts, chart axes and dates.

use chrono::NaiveDate;

use crate::api::types::DateRange;

pub const NAIRA: &str = "₦";

/// Label shown for an incomplete date range.
pub const SELECT_DATE_RANGE: &str = "Select Date Range";

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as NGN with exactly `fraction_digits` decimals,
/// e.g. `₦1,850,000.00` or `₦43,644`.
pub fn format_currency(amount: f64, fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", fraction_digits, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let sign = if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let mut out = format!("{}{}{}", sign, NAIRA, group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Abbreviate a Y-axis tick: `1.85M`, `320K`, `0`.
pub fn format_axis_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{}K", value / 1_000.0)
    } else {
        format!("{}", value)
    }
}

/// Signed percent change with two decimals, e.g. `+12.50%`, `-8.20%`.
pub fn format_change(change: f64) -> String {
    let sign = if change < 0.0 { "-" } else { "+" };
    format!("{}{:.2}%", sign, change.abs())
}

/// `Jun 6, 2023`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Jun 6, 2023 - Jun 15, 2023`, or the placeholder while incomplete.
pub fn format_date_range(range: &DateRange) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) => format!("{} - {}", format_date(from), format_date(to)),
        _ => SELECT_DATE_RANGE.to_string(),
    }
}
