//! Display Formatting
//!
//! Pure, total helpers that turn raw entity values into display strings:
//! - compact numbers (`22.58B`)
//! - truncated wallet addresses (`0x1234...cdef`)
//! - wallet balances at fixed precision
//! - thousands separators, percentages, dates and relative times
//!
//! None of these functions can fail. Malformed or out-of-range input maps to
//! a defined fallback string.

use chrono::{DateTime, NaiveDate, Utc};

/// Addresses longer than this many characters are truncated
pub const ADDRESS_TRUNCATE_THRESHOLD: usize = 13;

/// Characters kept from the start of a truncated address (includes `0x`)
const ADDRESS_HEAD: usize = 6;

/// Characters kept from the end of a truncated address
const ADDRESS_TAIL: usize = 4;

/// Smallest balance shown with digits; anything below shows [`DUST_BALANCE`]
pub const MIN_DISPLAY_BALANCE: f64 = 0.0001;

/// Balance shown when no balance is known
pub const ZERO_BALANCE: &str = "0.0000";

/// Balance shown for amounts below [`MIN_DISPLAY_BALANCE`]
pub const DUST_BALANCE: &str = "<0.0001";

/// Compact suffixes, largest first
const COMPACT_UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Format a number in compact form (`1500 -> "1.5K"`, `22_580_000_000 -> "22.58B"`)
///
/// At most two decimals are kept and trailing zeros are trimmed. Values whose
/// rounding carries into the next unit move up (`999_999 -> "1M"`).
/// Non-finite input formats as `"0"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let mut unit = COMPACT_UNITS.iter().position(|(base, _)| magnitude >= *base);

    // Rounding can push the mantissa to 1000 (999.999 -> "1000", 999_999 -> "1000K")
    match unit {
        Some(i) if i > 0 && round2(magnitude / COMPACT_UNITS[i].0) >= 1000.0 => unit = Some(i - 1),
        None if round2(magnitude) >= 1000.0 => unit = Some(COMPACT_UNITS.len() - 1),
        _ => {}
    }

    let body = match unit {
        Some(i) => {
            let (base, suffix) = COMPACT_UNITS[i];
            format!("{}{}", trim_decimals(magnitude / base), suffix)
        }
        None => trim_decimals(magnitude),
    };

    // "-0" is never shown for tiny negatives
    if value < 0.0 && body != "0" {
        format!("-{}", body)
    } else {
        body
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Shorten a wallet address to `0x1234...cdef` when it is longer than
/// [`ADDRESS_TRUNCATE_THRESHOLD`] characters; shorter input is returned as is
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_TRUNCATE_THRESHOLD {
        return address.to_string();
    }

    let head: String = chars[..ADDRESS_HEAD].iter().collect();
    let tail: String = chars[chars.len() - ADDRESS_TAIL..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Format a decimal balance string to four places
///
/// Absent, malformed or non-finite input shows [`ZERO_BALANCE`]. Any parsed
/// amount below [`MIN_DISPLAY_BALANCE`], zero included, shows
/// [`DUST_BALANCE`].
pub fn format_balance(raw: Option<&str>) -> String {
    let amount = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse::<f64>().ok(),
        None => None,
    };

    match amount {
        Some(v) if !v.is_finite() => ZERO_BALANCE.to_string(),
        Some(v) if v < MIN_DISPLAY_BALANCE => DUST_BALANCE.to_string(),
        Some(v) => format!("{:.4}", v),
        None => ZERO_BALANCE.to_string(),
    }
}

/// Insert thousands separators (`1850 -> "1,850"`)
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage label using the shortest representation (`15.4 -> "15.4%"`)
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", value)
    } else {
        "0%".to_string()
    }
}

/// Calendar date as `M/D/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Human readable age of a timestamp relative to `now`
///
/// Timestamps in the future are treated as "just now".
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    fn plural(n: i64, unit: &str) -> String {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    }

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        plural(seconds / 60, "minute")
    } else if seconds < 86400 {
        plural(seconds / 3600, "hour")
    } else {
        plural(seconds / 86400, "day")
    }
}
