//! Locale-aware number and currency formatting.
//!
//! Locale data is a small built-in table rather than a full CLDR binding;
//! the separators and currency placement cover the locales the original
//! helpers were used with.

use crate::error::{Error, Result};

/// Separator and currency conventions for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub decimal_sep: &'static str,
    pub group_sep: &'static str,
    pub currency_symbol: &'static str,
    /// Whether the currency symbol precedes the amount.
    pub symbol_first: bool,
}

pub const EN: Locale = Locale {
    tag: "en",
    decimal_sep: ".",
    group_sep: ",",
    currency_symbol: "$",
    symbol_first: true,
};

pub const DE: Locale = Locale {
    tag: "de",
    decimal_sep: ",",
    group_sep: ".",
    currency_symbol: "\u{20ac}",
    symbol_first: false,
};

pub const FR: Locale = Locale {
    tag: "fr",
    decimal_sep: ",",
    group_sep: "\u{a0}",
    currency_symbol: "\u{20ac}",
    symbol_first: false,
};

pub const DE_CH: Locale = Locale {
    tag: "de-CH",
    decimal_sep: ".",
    group_sep: "\u{2019}",
    currency_symbol: "CHF",
    symbol_first: true,
};

impl Locale {
    /// Look up a built-in locale by tag.
    pub fn named(tag: &str) -> Result<Locale> {
        match tag {
            "en" => Ok(EN),
            "de" => Ok(DE),
            "fr" => Ok(FR),
            "de-CH" => Ok(DE_CH),
            _ => Err(Error::locale_unknown(tag)),
        }
    }
}

/// Format with three-digit grouping and the locale's separators, rounded
/// half away from zero to `decimals` places.
pub fn format(value: f64, decimals: u8, locale: &Locale) -> String {
    // `{:.*}` on f64 rounds ties to even; scale and round explicitly so
    // ties go away from zero.
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * factor).round();
    let digits = format!("{:.0}", scaled);

    let negative = value.is_sign_negative() && digits.chars().any(|c| c != '0');

    let (int_part, frac_part) = if decimals == 0 {
        (digits, None)
    } else if digits.len() <= decimals as usize {
        let frac = format!("{:0>width$}", digits, width = decimals as usize);
        ("0".to_string(), Some(frac))
    } else {
        let split = digits.len() - decimals as usize;
        (digits[..split].to_string(), Some(digits[split..].to_string()))
    };

    let grouped = group_thousands(&int_part, locale.group_sep);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push_str(locale.decimal_sep);
        out.push_str(&frac);
    }
    out
}

/// Format as currency: two decimals plus the locale's symbol in its
/// conventional position.
pub fn currency(value: f64, locale: &Locale) -> String {
    let amount = format(value, 2, locale);
    if locale.symbol_first {
        format!("{}{}", locale.currency_symbol, amount)
    } else {
        format!("{}\u{a0}{}", amount, locale.currency_symbol)
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::new();

    for (i, ch) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push_str(separator);
        }
        out.push(*ch);
    }

    out
}
