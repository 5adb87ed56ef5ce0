//! Exact decimal amounts
//!
//! Amounts are kept as a whole part plus the decimal digits after the
//! point, so scaling to a minor unit never goes through floating point.
//! Trailing zeros in the fraction are dropped on parse: `"1.50"` and
//! `"1.5"` are the same amount.

use crate::errors::{KilnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const AMOUNT_CONTRACT: &str = "amount";

/// Non-negative decimal amount in major units
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    whole: u64,
    fraction: String,
}

impl Amount {
    /// Amount with no fractional part
    pub fn from_major(whole: u64) -> Self {
        Self {
            whole,
            fraction: String::new(),
        }
    }

    /// Whole major units
    pub fn whole(&self) -> u64 {
        self.whole
    }

    /// Significant fractional digits
    pub fn fraction_digits(&self) -> usize {
        self.fraction.len()
    }

    /// Scale to a minor unit of `10^exponent` per major unit
    ///
    /// Exact for every amount that has at most `exponent` fractional digits
    /// and fits in `u64` after scaling; otherwise fails with
    /// [`KilnError::ConversionFailure`].
    pub fn to_minor_units(&self, exponent: u32) -> Result<u64> {
        let target = format!("minor units (10^{exponent})");
        let digits = self.fraction.len() as u32;
        if digits > exponent {
            return Err(KilnError::conversion(
                AMOUNT_CONTRACT,
                target,
                format!("{self} has {digits} fractional digits"),
            ));
        }

        let overflow = || {
            KilnError::conversion(AMOUNT_CONTRACT, target.clone(), format!("{self} overflows u64"))
        };
        let scale = 10u64.checked_pow(exponent).ok_or_else(overflow)?;
        let fraction = if self.fraction.is_empty() {
            0
        } else {
            let value: u64 = self.fraction.parse().map_err(|_| overflow())?;
            value
                .checked_mul(10u64.pow(exponent - digits))
                .ok_or_else(overflow)?
        };

        self.whole
            .checked_mul(scale)
            .and_then(|units| units.checked_add(fraction))
            .ok_or_else(overflow)
    }
}

impl FromStr for Amount {
    type Err = KilnError;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = |reason: &str| {
            KilnError::conversion("text", AMOUNT_CONTRACT, format!("'{text}': {reason}"))
        };

        let trimmed = text.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() {
            return Err(invalid("missing whole part"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected unsigned decimal digits"));
        }
        if trimmed.ends_with('.') {
            return Err(invalid("missing fractional digits"));
        }

        let whole: u64 = whole.parse().map_err(|_| invalid("whole part overflows u64"))?;
        Ok(Self {
            whole,
            fraction: fraction.trim_end_matches('0').to_string(),
        })
    }
}

impl TryFrom<String> for Amount {
    type Error = KilnError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}
