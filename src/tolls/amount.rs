use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::AmountFormatError;

fn positive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\$\s*(\d+(?:\.\d+)?)\s*$").expect("positive amount regex"))
}

fn negative_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\(\s*\$\s*(\d+(?:\.\d+)?)\s*\)\s*$").expect("negative amount regex")
    })
}

/// Parses a dollar amount in the export's two surface forms: `$1.00` for a
/// charge and `($1.00)` for a credit (parenthesized accounting notation).
/// Whitespace around the whole value, the `$` and the parentheses is
/// ignored. Anything else is an `AmountFormatError` carrying the input text.
pub fn parse_dollar_amount(text: &str) -> Result<Decimal, AmountFormatError> {
    if let Some(captures) = positive_re().captures(text) {
        return decimal_digits(&captures[1], text);
    }

    if let Some(captures) = negative_re().captures(text) {
        return decimal_digits(&captures[1], text).map(|amount| -amount);
    }

    Err(AmountFormatError { text: text.to_owned() })
}

fn decimal_digits(digits: &str, original: &str) -> Result<Decimal, AmountFormatError> {
    // `\d` also matches non-ASCII digits; those fail here.
    Decimal::from_str_exact(digits).map_err(|_| AmountFormatError {
        text: original.to_owned(),
    })
}
