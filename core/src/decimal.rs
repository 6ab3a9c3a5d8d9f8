//! Fixed-point decimal numbers for token quantities
//!
//! A `DecimalBigNumber` is an integer count of the smallest token unit
//! together with the number of decimal places that unit represents.
//! sOHM uses 9 decimal places, so `1.5` is stored as `1_500_000_000`.
//! Parsing, comparison and subtraction are exact.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

use num_bigint::{BigInt, Sign};
use serde::{Serialize, Serializer};

use crate::error::{CoreError, Result};

fn ten_pow(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

/// Display options for [`DecimalBigNumber::to_formatted_string`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Number of fractional digits to round to
    pub decimals: u32,
    /// Drop zeros at the end of the fractional part
    pub trim_trailing_zeroes: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 2,
            trim_trailing_zeroes: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecimalBigNumber {
    value: BigInt,
    decimals: u32,
}

impl DecimalBigNumber {
    /// Parse a plain decimal string (`"12"`, `"-0.5"`, `".25"`).
    ///
    /// Fractional digits beyond `decimals` are truncated.
    pub fn new(text: &str, decimals: u32) -> Result<Self> {
        let invalid = || CoreError::InvalidDecimal(text.to_string());

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // ASCII digits only past this point, so byte slicing is safe
        let kept = &fraction[..fraction.len().min(decimals as usize)];
        let padding = "0".repeat(decimals as usize - kept.len());
        let digits = format!("{}{}{}", whole, kept, padding);

        let magnitude = if digits.is_empty() {
            BigInt::default()
        } else {
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?
        };

        Ok(Self {
            value: if negative { -magnitude } else { magnitude },
            decimals,
        })
    }

    /// Parse `text`, falling back to zero when it is not a usable number
    pub fn from_str_lossy(text: &str, decimals: u32) -> Self {
        Self::new(text, decimals).unwrap_or_else(|_| Self::zero(decimals))
    }

    pub fn zero(decimals: u32) -> Self {
        Self {
            value: BigInt::default(),
            decimals,
        }
    }

    /// Wrap an integer already expressed in the smallest unit
    pub fn from_scaled(value: BigInt, decimals: u32) -> Self {
        Self { value, decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// The integer amount in the smallest unit
    pub fn scaled_value(&self) -> &BigInt {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.sign() == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.value.sign() == Sign::Minus
    }

    fn scaled_to(&self, decimals: u32) -> BigInt {
        debug_assert!(decimals >= self.decimals);
        &self.value * ten_pow(decimals - self.decimals)
    }

    /// Full-precision string with trailing fractional zeros removed
    pub fn to_accurate_string(&self) -> String {
        let (whole, fraction) = split_digits(&magnitude(&self.value), self.decimals);
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&whole);
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Rounded, comma-grouped string for display
    pub fn to_formatted_string(&self, options: FormatOptions) -> String {
        let target = options.decimals;
        let rounded = if target >= self.decimals {
            magnitude(&self.scaled_to(target))
        } else {
            let divisor = ten_pow(self.decimals - target);
            let abs = magnitude(&self.value);
            let quotient = &abs / &divisor;
            let remainder = &abs % &divisor;
            if remainder * 2u32 >= divisor {
                quotient + 1u32
            } else {
                quotient
            }
        };

        let (whole, fraction) = split_digits(&rounded, target);
        let fraction = if options.trim_trailing_zeroes {
            fraction.trim_end_matches('0').to_string()
        } else {
            fraction
        };

        let mut out = String::new();
        if self.is_negative() && rounded.sign() != Sign::NoSign {
            out.push('-');
        }
        out.push_str(&group_thousands(&whole));
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(&fraction);
        }
        out
    }
}

fn magnitude(value: &BigInt) -> BigInt {
    BigInt::from(value.magnitude().clone())
}

/// Split a non-negative scaled integer into whole and zero-padded fractional digits
fn split_digits(value: &BigInt, decimals: u32) -> (String, String) {
    let decimals = decimals as usize;
    let mut digits = value.to_string();
    if digits.len() <= decimals {
        digits = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
    }
    let fraction = digits.split_off(digits.len() - decimals);
    (digits, fraction)
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl PartialEq for DecimalBigNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalBigNumber {}

impl PartialOrd for DecimalBigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalBigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let decimals = self.decimals.max(other.decimals);
        self.scaled_to(decimals).cmp(&other.scaled_to(decimals))
    }
}

impl Sub for &DecimalBigNumber {
    type Output = DecimalBigNumber;

    fn sub(self, rhs: &DecimalBigNumber) -> DecimalBigNumber {
        let decimals = self.decimals.max(rhs.decimals);
        DecimalBigNumber::from_scaled(self.scaled_to(decimals) - rhs.scaled_to(decimals), decimals)
    }
}

impl Sub for DecimalBigNumber {
    type Output = DecimalBigNumber;

    fn sub(self, rhs: DecimalBigNumber) -> DecimalBigNumber {
        &self - &rhs
    }
}

impl fmt::Display for DecimalBigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_accurate_string())
    }
}

impl Serialize for DecimalBigNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_accurate_string())
    }
}
