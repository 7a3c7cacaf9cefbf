//! Amount type for handling monetary values from currency-formatted catalog cells.
//!
//! This module provides the `Amount` type which wraps `Decimal` and handles parsing values
//! that may carry currency symbols, commas, stray spaces or no numeric content at all.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Represents a rupee amount.
///
/// Catalog price cells are free-form text, so parsing is total: any input produces a
/// non-negative amount, and blank or non-numeric input produces exactly zero.
///
/// # Examples
///
/// ```
/// # use quotegen::model::Amount;
/// assert_eq!(Amount::parse_lenient("Rs 1,250.00").to_string(), "1,250.00");
/// assert_eq!(Amount::parse_lenient("-"), Amount::ZERO);
/// assert_eq!(Amount::parse_lenient(""), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parses a free-form price cell.
    ///
    /// Every character except decimal digits and `.` is stripped before parsing. If nothing
    /// parseable remains, the result is zero. The result is never negative because the minus
    /// sign is among the stripped characters.
    pub fn parse_lenient(raw: &str) -> Self {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if digits.is_empty() {
            return Amount::ZERO;
        }
        Decimal::from_str(&digits).map(Amount::new).unwrap_or(Amount::ZERO)
    }

    /// The amount after applying a whole-number discount percent.
    pub fn discounted(&self, percent: u8) -> Self {
        let remaining = Decimal::from(100u32 - u32::from(percent)) / Decimal::ONE_HUNDRED;
        Amount(self.0 * remaining)
    }

    /// The amount multiplied by a quantity of copies.
    pub fn times(&self, quantity: u32) -> Self {
        Amount(self.0 * Decimal::from(quantity))
    }

    /// Renders with zero decimal places, as used for per-item currency cells.
    pub fn whole(&self) -> String {
        self.0.round_dp(0).to_string()
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

/// Two decimal places with thousands separators, as used for the grand total.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_num::format_num!(",.2", self.0.to_f64().unwrap_or_default())
        )
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Amount::parse_lenient(&s))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
