// templates/format.rs
use chrono::NaiveDate;

/// Inserts thousands separators: 1850 -> "1,850".
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

/// Whole-dollar USD amount: 1500000.0 -> "$1,500,000".
pub fn usd(amount: f64) -> String {
    // `as` saturates, so huge or NaN amounts clamp instead of panicking.
    let digits = thousands(amount.round() as i64);
    match digits.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${digits}"),
    }
}

/// "2024-03-05" (or a full timestamp) -> "March 5, 2024". Unknown formats are
/// shown as stored.
pub fn long_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "single_family" -> "single family".
pub fn humanize(code: &str) -> String {
    code.replace('_', " ")
}

/// Bathrooms print without a trailing ".0".
pub fn baths(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
