use thiserror::Error;

pub mod amount;
pub mod pipeline;
pub mod records;
pub mod totals;


/// The amount column did not match either the `$1.00` or the `($1.00)` form.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected either ($1.00) or $1.00 format, got {text:?}")]
pub struct AmountFormatError {
    pub text: String,
}

/// A batch run aborted because one record's amount could not be parsed.
/// `record` is the 1-based position of that record in the input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("record {record}: {source}")]
pub struct BatchError {
    pub record: usize,
    #[source]
    pub source: AmountFormatError,
}
