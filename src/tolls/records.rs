use std::collections::HashMap;

use getset::Getters;
use rust_decimal::Decimal;

use super::amount;
use super::AmountFormatError;

/// One row of the toll export exactly as read, amount still unparsed text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToll {
    pub posting_date: String,
    pub transaction_date: String,
    pub tag: String,
    pub amount: String,
}

/// A `RawToll` with the amount parsed and the tag attributed to an owner.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct ProcessedToll {
    posting_date: String,
    transaction_date: String,
    tag: String,
    owner: String,
    amount: Decimal,
}

/// Returns the owner configured for `tag`, or the tag itself when no owner
/// is configured. Tags absent from the mapping (including empty ones) are
/// an ordinary lookup miss, not an error.
pub fn resolve_owner<'a>(tag: &'a str, owners: &'a HashMap<String, String>) -> &'a str {
    owners.get(tag).map(String::as_str).unwrap_or(tag)
}

impl ProcessedToll {
    /// Normalizes one raw record: dates and tag are copied verbatim, the
    /// owner is resolved through the mapping and the amount text is parsed.
    pub fn from_raw(
        raw: &RawToll,
        owners: &HashMap<String, String>,
    ) -> Result<ProcessedToll, AmountFormatError> {
        Ok(ProcessedToll {
            posting_date: raw.posting_date.clone(),
            transaction_date: raw.transaction_date.clone(),
            tag: raw.tag.clone(),
            owner: resolve_owner(&raw.tag, owners).to_owned(),
            amount: amount::parse_dollar_amount(&raw.amount)?,
        })
    }
}
