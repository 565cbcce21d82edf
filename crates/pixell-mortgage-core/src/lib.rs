//! Validation and payment calculations for PiXELL River mortgage
//! records.
//!
//! The crate exposes the [`Mortgage`] entity plus the lookup tables it
//! validates against: posted rate codes, payment frequencies and the
//! allowed amortization periods. Batch input handling lives in the
//! `pixell` CLI crate; everything here is pure computation.

pub mod error;
pub mod lookup;
pub mod mortgage;
pub mod types;

pub use error::{LookupError, MortgageError};
pub use lookup::{is_valid_amortization, MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
pub use mortgage::Mortgage;
pub use types::*;

/// Standard result type for all mortgage record operations.
pub type MortgageResult<T> = Result<T, MortgageError>;
