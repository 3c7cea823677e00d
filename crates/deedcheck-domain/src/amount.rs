//! Amount module - money values held as whole cents

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a currency numeral cannot be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    /// Nothing left after stripping the currency symbol and separators
    #[error("empty amount")]
    Empty,

    /// A character other than digits, separators or one decimal point
    #[error("unexpected character '{0}' in amount")]
    InvalidCharacter(char),

    /// More than two digits after the decimal point
    #[error("too many decimal places in amount")]
    TooManyDecimals,

    /// Value does not fit in u64 cents
    #[error("amount is too large")]
    Overflow,
}

/// A non-negative money amount in cents
///
/// Comparisons and differences are exact; conversion to floating point only
/// happens for serialization and percentage reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// Zero dollars
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from a number of cents
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole dollars, `None` on overflow
    pub fn from_dollars(dollars: u64) -> Option<Self> {
        dollars.checked_mul(100).map(Self)
    }

    /// Raw value in cents
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Value in dollars as a float
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Absolute difference between two amounts
    pub fn abs_diff(&self, other: Amount) -> Amount {
        Amount(self.0.abs_diff(other.0))
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    /// Parse a currency numeral such as `$1,250,000.00`
    ///
    /// # Examples
    ///
    /// ```
    /// use deedcheck_domain::Amount;
    ///
    /// let amount: Amount = "$1,250,000.00".parse().unwrap();
    /// assert_eq!(amount.cents(), 125_000_000);
    /// assert_eq!(amount.to_string(), "$1,250,000.00");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

        let mut whole: u64 = 0;
        let mut fraction: u64 = 0;
        let mut fraction_digits = 0u32;
        let mut seen_digit = false;
        let mut in_fraction = false;

        for c in trimmed.chars() {
            match c {
                ',' if !in_fraction => continue,
                '.' if !in_fraction => in_fraction = true,
                '0'..='9' => {
                    let digit = u64::from(c as u8 - b'0');
                    seen_digit = true;
                    if in_fraction {
                        fraction_digits += 1;
                        if fraction_digits > 2 {
                            return Err(AmountParseError::TooManyDecimals);
                        }
                        fraction = fraction * 10 + digit;
                    } else {
                        whole = whole
                            .checked_mul(10)
                            .and_then(|w| w.checked_add(digit))
                            .ok_or(AmountParseError::Overflow)?;
                    }
                }
                other => return Err(AmountParseError::InvalidCharacter(other)),
            }
        }

        if !seen_digit {
            return Err(AmountParseError::Empty);
        }

        // "$5.5" means fifty cents, not five
        if fraction_digits == 1 {
            fraction *= 10;
        }

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Amount)
            .ok_or(AmountParseError::Overflow)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let cents = self.0 % 100;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, c) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "${}.{:02}", grouped, cents)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_symbol_and_separators() {
        let amount: Amount = "$1,250,000.00".parse().unwrap();
        assert_eq!(amount.cents(), 125_000_000);
    }

    #[test]
    fn test_parse_plain_digits() {
        let amount: Amount = "1250000".parse().unwrap();
        assert_eq!(amount, Amount::from_dollars(1_250_000).unwrap());
    }

    #[test]
    fn test_parse_single_decimal_digit() {
        let amount: Amount = "$ 12.5".parse().unwrap();
        assert_eq!(amount.cents(), 1250);
    }

    #[test]
    fn test_parse_rejects_three_decimals() {
        assert_eq!(
            "1.234".parse::<Amount>(),
            Err(AmountParseError::TooManyDecimals)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("$12O,000".parse::<Amount>(), Err(AmountParseError::InvalidCharacter('O')));
        assert_eq!("$".parse::<Amount>(), Err(AmountParseError::Empty));
        assert_eq!("1.2.3".parse::<Amount>(), Err(AmountParseError::InvalidCharacter('.')));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            "99999999999999999999".parse::<Amount>(),
            Err(AmountParseError::Overflow)
        );
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Amount::from_cents(0).to_string(), "$0.00");
        assert_eq!(Amount::from_cents(99_905).to_string(), "$999.05");
        assert_eq!(Amount::from_cents(100_000).to_string(), "$1,000.00");
        assert_eq!(Amount::from_cents(5_000_000).to_string(), "$50,000.00");
        assert_eq!(Amount::from_cents(125_000_000).to_string(), "$1,250,000.00");
    }

    #[test]
    fn test_abs_diff_is_symmetric() {
        let a = Amount::from_dollars(1_250_000).unwrap();
        let b = Amount::from_dollars(1_200_000).unwrap();
        assert_eq!(a.abs_diff(b), b.abs_diff(a));
        assert_eq!(a.abs_diff(b).to_string(), "$50,000.00");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let amount = Amount::from_cents(125_000_050);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "1250000.5");
    }
}
