//! The mortgage record entity: field validation, payment calculation
//! and statement rendering.
//!
//! A `Mortgage` is constructed once per input record. Construction is
//! atomic (any invalid field fails the whole record) and every field
//! keeps its invariant across later mutation. All math is in
//! `rust_decimal::Decimal`.

use std::fmt;

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::MortgageError;
use crate::lookup::{is_valid_amortization, MortgageRate, PaymentFrequency};
use crate::types::Money;
use crate::MortgageResult;

/// A single validated mortgage record.
///
/// Invariants, re-checked on every mutation:
/// - `loan_amount` is strictly positive
/// - `rate` and `frequency` are resolved table entries
/// - `amortization` is one of the valid year counts
#[derive(Clone, PartialEq, Serialize)]
pub struct Mortgage {
    loan_amount: Money,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

impl Mortgage {
    /// Validate the four fields and construct a record.
    ///
    /// Fields are checked in order (amount, rate, frequency,
    /// amortization) and the first failure wins; no object exists on
    /// error. Rate and frequency names are resolved against the lookup
    /// tables, with a failed lookup re-signalled as the corresponding
    /// validation error.
    pub fn new(
        loan_amount: Money,
        rate_name: &str,
        frequency_name: &str,
        amortization: u32,
    ) -> MortgageResult<Self> {
        if loan_amount <= Decimal::ZERO {
            return Err(MortgageError::LoanAmountNotPositive);
        }
        let rate =
            MortgageRate::from_name(rate_name).map_err(|_| MortgageError::InvalidRate)?;
        let frequency = PaymentFrequency::from_name(frequency_name)
            .map_err(|_| MortgageError::InvalidFrequency)?;
        if !is_valid_amortization(amortization) {
            return Err(MortgageError::InvalidAmortization);
        }

        Ok(Self {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    /// Principal owed on the mortgage.
    pub fn loan_amount(&self) -> Money {
        self.loan_amount
    }

    /// Replace the loan amount; rejects non-positive values and leaves
    /// the current amount in place on failure.
    pub fn set_loan_amount(&mut self, value: Money) -> MortgageResult<()> {
        if value <= Decimal::ZERO {
            return Err(MortgageError::LoanAmountNotPositive);
        }
        self.loan_amount = value;
        Ok(())
    }

    /// The resolved rate table entry.
    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    /// Re-resolve the rate from a table name; the current rate is kept
    /// when the name is unknown.
    pub fn set_rate(&mut self, rate_name: &str) -> MortgageResult<()> {
        self.rate =
            MortgageRate::from_name(rate_name).map_err(|_| MortgageError::InvalidRate)?;
        Ok(())
    }

    /// The resolved payment frequency table entry.
    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    /// Re-resolve the frequency from a table name; the current
    /// frequency is kept when the name is unknown.
    pub fn set_frequency(&mut self, frequency_name: &str) -> MortgageResult<()> {
        self.frequency = PaymentFrequency::from_name(frequency_name)
            .map_err(|_| MortgageError::InvalidFrequency)?;
        Ok(())
    }

    /// Scheduled repayment period in years.
    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    /// Replace the amortization period; must be a valid year count.
    pub fn set_amortization(&mut self, years: u32) -> MortgageResult<()> {
        if !is_valid_amortization(years) {
            return Err(MortgageError::InvalidAmortization);
        }
        self.amortization = years;
        Ok(())
    }

    /// Level periodic payment that fully amortizes the loan.
    ///
    /// Standard annuity formula with i = annual rate / payments per
    /// year and n = amortization years * payments per year:
    ///
    ///   payment = P * i * (1+i)^n / ((1+i)^n - 1)
    ///
    /// Rounded to currency precision (2 dp, midpoint away from zero).
    /// Pure: repeated calls on unchanged fields return the same value.
    pub fn calculate_payment(&self) -> Money {
        let per_year = Decimal::from(self.frequency.payments_per_year());
        let periodic_rate = self.rate.annual_rate() / per_year;
        let periods = i64::from(self.amortization * self.frequency.payments_per_year());

        let growth = (Decimal::ONE + periodic_rate).powi(periods);
        let payment = self.loan_amount * (periodic_rate * growth) / (growth - Decimal::ONE);

        payment.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Customer-facing statement block.
impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate_percent = self.rate.annual_rate() * dec!(100);
        write!(
            f,
            "Mortgage Amount: ${}\n\
             Rate: {:.2}%\n\
             Amortization: {}\n\
             Frequency: {} -- Calculated Payment: ${}",
            format_money(self.loan_amount),
            rate_percent,
            self.amortization,
            self.frequency.display_name(),
            format_money(self.calculate_payment()),
        )
    }
}

/// Diagnostic rendering with raw field values, enough to reconstruct
/// the exact state: amount at 2 dp, rate as its decimal value,
/// frequency as its payments-per-year count.
impl fmt::Debug for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage(loan_amount={:.2}, rate={}, amortization={}, frequency={})",
            self.loan_amount,
            self.rate.annual_rate(),
            self.amortization,
            self.frequency.payments_per_year(),
        )
    }
}

/// Format a monetary value with a thousands separator and 2 decimals.
fn format_money(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{rounded:.2}");
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(3.5)), "3.50");
        assert_eq!(format_money(dec!(999)), "999.00");
        assert_eq!(format_money(dec!(1000)), "1,000.00");
        assert_eq!(format_money(dec!(682912.43)), "682,912.43");
        assert_eq!(format_money(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_money(dec!(-45000.5)), "-45,000.50");
    }

    #[test]
    fn test_format_money_rounds_half_away_from_zero() {
        assert_eq!(format_money(dec!(2.005)), "2.01");
        assert_eq!(format_money(dec!(-2.005)), "-2.01");
    }
}
