//! File-size parsing and formatting with binary multiples.

use crate::error::{Error, Result};

const KIB: u64 = 1024;

/// Parse a human-readable size like `"5MB"`, `"1.5 GB"`, or `"512"` into a
/// byte count. Suffixes are case-insensitive, use binary multiples, and may
/// be abbreviated to their first letter; a bare number is bytes.
pub fn parse(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation_invalid_argument(
            "size",
            "Size cannot be empty",
            None,
        ));
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let unit = unit.trim();

    let value: f64 = number.parse().map_err(|_| {
        Error::validation_invalid_argument(
            "size",
            "Malformed number",
            Some(input.to_string()),
        )
    })?;

    let multiplier: u64 = match unit.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" => KIB,
        "M" | "MB" => KIB.pow(2),
        "G" | "GB" => KIB.pow(3),
        "T" | "TB" => KIB.pow(4),
        "P" | "PB" => KIB.pow(5),
        _ => return Err(Error::size_unknown_unit(input, unit)),
    };

    let bytes = value * multiplier as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(Error::validation_invalid_argument(
            "size",
            "Size exceeds the byte range",
            Some(input.to_string()),
        ));
    }

    Ok(bytes as u64)
}

/// Render a byte count with the largest fitting unit, e.g. `"1.50 MB"`.
pub fn format(bytes: u64, decimals: u8) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes < KIB {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= KIB as f64 && unit < UNITS.len() - 1 {
        value /= KIB as f64;
        unit += 1;
    }

    format!("{:.*} {}", decimals as usize, value, UNITS[unit])
}
