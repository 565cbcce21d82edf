use thiserror::Error;

/// Domain validation failure for a mortgage record field.
///
/// Each variant carries the canonical message the batch driver reports
/// alongside the offending record. Raised by `Mortgage::new` and every
/// mutator; the object (or the field being mutated) is left untouched
/// on failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MortgageError {
    #[error("Loan Amount must be positive.")]
    LoanAmountNotPositive,

    #[error("Rate provided is invalid.")]
    InvalidRate,

    #[error("Frequency provided is invalid.")]
    InvalidFrequency,

    #[error("Amortization provided is invalid.")]
    InvalidAmortization,
}

/// A name that failed to resolve against one of the lookup tables.
///
/// Distinct from [`MortgageError`]: this is the raw "not found" signal
/// from the table itself. `Mortgage` catches it at the construction or
/// mutation site and re-signals the corresponding validation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown rate code: {0}")]
    UnknownRate(String),

    #[error("unknown payment frequency: {0}")]
    UnknownFrequency(String),
}
