//! Lookup tables for valid mortgage rates, payment frequencies and
//! amortization periods.
//!
//! The tables are closed enums fixed at compile time. Resolution of an
//! unknown name yields a [`LookupError`] rather than a silent default;
//! callers decide how to translate that into a domain error.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::types::Rate;
use rust_decimal_macros::dec;

/// Amortization periods (in years) a mortgage may be scheduled over.
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Membership test against [`VALID_AMORTIZATION`].
pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION.contains(&years)
}

/// Posted annual interest rates, keyed by product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageRate {
    Fixed5,
    Fixed3,
    Fixed1,
    Variable5,
    Variable3,
    Variable1,
}

impl MortgageRate {
    /// Resolve a rate code (e.g. `"FIXED_5"`) from the table.
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match name {
            "FIXED_5" => Ok(Self::Fixed5),
            "FIXED_3" => Ok(Self::Fixed3),
            "FIXED_1" => Ok(Self::Fixed1),
            "VARIABLE_5" => Ok(Self::Variable5),
            "VARIABLE_3" => Ok(Self::Variable3),
            "VARIABLE_1" => Ok(Self::Variable1),
            other => Err(LookupError::UnknownRate(other.to_string())),
        }
    }

    /// Annual rate as a decimal (0.0519 = 5.19%).
    pub fn annual_rate(&self) -> Rate {
        match self {
            Self::Fixed5 => dec!(0.0519),
            Self::Fixed3 => dec!(0.0589),
            Self::Fixed1 => dec!(0.0599),
            Self::Variable5 => dec!(0.0649),
            Self::Variable3 => dec!(0.0669),
            Self::Variable1 => dec!(0.0679),
        }
    }

    /// Symbolic table name, the inverse of [`MortgageRate::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fixed5 => "FIXED_5",
            Self::Fixed3 => "FIXED_3",
            Self::Fixed1 => "FIXED_1",
            Self::Variable5 => "VARIABLE_5",
            Self::Variable3 => "VARIABLE_3",
            Self::Variable1 => "VARIABLE_1",
        }
    }
}

/// How often payments are made, keyed by schedule name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    /// Resolve a frequency name (e.g. `"MONTHLY"`) from the table.
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match name {
            "MONTHLY" => Ok(Self::Monthly),
            "BI_WEEKLY" => Ok(Self::BiWeekly),
            "WEEKLY" => Ok(Self::Weekly),
            other => Err(LookupError::UnknownFrequency(other.to_string())),
        }
    }

    /// Number of payments made per year.
    pub fn payments_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::BiWeekly => 26,
            Self::Weekly => 52,
        }
    }

    /// Symbolic table name, the inverse of [`PaymentFrequency::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::BiWeekly => "BI_WEEKLY",
            Self::Weekly => "WEEKLY",
        }
    }

    /// Title-cased name for statements ("Monthly", "Bi_Weekly", "Weekly").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::BiWeekly => "Bi_Weekly",
            Self::Weekly => "Weekly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rate_code_resolves() {
        for (name, rate) in [
            ("FIXED_5", dec!(0.0519)),
            ("FIXED_3", dec!(0.0589)),
            ("FIXED_1", dec!(0.0599)),
            ("VARIABLE_5", dec!(0.0649)),
            ("VARIABLE_3", dec!(0.0669)),
            ("VARIABLE_1", dec!(0.0679)),
        ] {
            let resolved = MortgageRate::from_name(name).unwrap();
            assert_eq!(resolved.annual_rate(), rate);
            assert_eq!(resolved.name(), name);
        }
    }

    #[test]
    fn test_unknown_rate_code() {
        let err = MortgageRate::from_name("FIXED_6").unwrap_err();
        assert_eq!(err, LookupError::UnknownRate("FIXED_6".to_string()));
    }

    #[test]
    fn test_every_frequency_resolves() {
        for (name, per_year) in [("MONTHLY", 12), ("BI_WEEKLY", 26), ("WEEKLY", 52)] {
            let resolved = PaymentFrequency::from_name(name).unwrap();
            assert_eq!(resolved.payments_per_year(), per_year);
            assert_eq!(resolved.name(), name);
        }
    }

    #[test]
    fn test_unknown_frequency() {
        let err = PaymentFrequency::from_name("QUARTERLY").unwrap_err();
        assert_eq!(err, LookupError::UnknownFrequency("QUARTERLY".to_string()));
    }

    #[test]
    fn test_frequency_display_names() {
        assert_eq!(PaymentFrequency::Monthly.display_name(), "Monthly");
        assert_eq!(PaymentFrequency::BiWeekly.display_name(), "Bi_Weekly");
        assert_eq!(PaymentFrequency::Weekly.display_name(), "Weekly");
    }

    #[test]
    fn test_amortization_membership() {
        for years in VALID_AMORTIZATION {
            assert!(is_valid_amortization(years));
        }
        assert!(!is_valid_amortization(0));
        assert!(!is_valid_amortization(12));
        assert!(!is_valid_amortization(40));
    }
}
