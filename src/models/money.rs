//! Money type for representing currency amounts
//!
//! Amounts are held as integer cents (i64) so sums and bracket arithmetic stay
//! exact. On the wire an amount is a plain JSON decimal (`1234.56`); for
//! display it is formatted as Brazilian reais (`R$ 1.234,56`).

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Symbol used by the default [`fmt::Display`] implementation
pub const CURRENCY_SYMBOL: &str = "R$";

/// A monetary amount stored as cents (hundredths of a real)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10,50
    /// assert_eq!(amount.to_string(), "R$ 10,50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Convert a decimal number to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a decimal number of units (lossy for huge values)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Plain decimal text with a dot separator, e.g. `-1234.56`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts `"10.50"`, `"-10.50"`, `"10"`, `"R$ 1.234,56"` and `"1234,5"`.
    /// When a comma is present it is the decimal separator and dots are
    /// thousands separators; otherwise a dot is the decimal separator.
    /// Digits beyond the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, trimmed),
        };

        let rest = rest
            .strip_prefix(CURRENCY_SYMBOL)
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim();

        let normalized = if rest.contains(',') {
            rest.replace('.', "").replace(',', ".")
        } else {
            rest.to_string()
        };

        let (units_str, fraction_str) = match normalized.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (normalized.as_str(), ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (units_str.is_empty() && fraction_str.is_empty())
            || !all_digits(units_str)
            || !all_digits(fraction_str)
        {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        let fraction: i64 = match fraction_str.len() {
            0 => 0,
            1 => fraction_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction_str[..2].parse().map_err(|_| invalid())?,
        };

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol using Brazilian separators
    ///
    /// ```
    /// use fintrack::models::Money;
    /// assert_eq!(Money::from_cents(123456).format_with_symbol("R$"), "R$ 1.234,56");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{} {},{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(CURRENCY_SYMBOL))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Amounts arrive either as JSON numbers or as strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Money::from_f64(value)
                .ok_or_else(|| de::Error::custom(format!("invalid amount: {}", value))),
            RawAmount::Text(text) => Money::parse(&text).map_err(de::Error::custom),
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self(self.0 * factor)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units_cents(10, 50), m);
    }

    #[test]
    fn test_display_uses_brazilian_format() {
        assert_eq!(Money::from_cents(1050).to_string(), "R$ 10,50");
        assert_eq!(Money::from_cents(0).to_string(), "R$ 0,00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-R$ 10,50");
        assert_eq!(Money::from_cents(123456789).to_string(), "R$ 1.234.567,89");
        assert_eq!(Money::from_cents(100000).to_string(), "R$ 1.000,00");
        assert_eq!(Money::from_cents(99999).to_string(), "R$ 999,99");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(123456).to_decimal_string(), "1234.56");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!((b * 3).cents(), 1500);
    }

    #[test]
    fn test_parse_dot_decimal() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("$7.999").unwrap().cents(), 799);
    }

    #[test]
    fn test_parse_brazilian_notation() {
        assert_eq!(Money::parse("R$ 1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("1234,5").unwrap().cents(), 123450);
        assert_eq!(Money::parse("-R$ 0,99").unwrap().cents(), -99);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12a.00").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_from_f64_rounds_to_cent() {
        assert_eq!(Money::from_f64(10.006).unwrap().cents(), 1001);
        assert_eq!(Money::from_f64(0.1 + 0.2).unwrap().cents(), 30);
        assert!(Money::from_f64(f64::NAN).is_none());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let borrowed: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(borrowed, total);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "10.5");
        let json = serde_json::to_string(&Money::from_cents(123456)).unwrap();
        assert_eq!(json, "1234.56");
    }

    #[test]
    fn test_deserializes_numbers_and_strings() {
        let m: Money = serde_json::from_str("1234.56").unwrap();
        assert_eq!(m.cents(), 123456);
        let m: Money = serde_json::from_str("1500").unwrap();
        assert_eq!(m.cents(), 150000);
        let m: Money = serde_json::from_str("\"1.500,25\"").unwrap();
        assert_eq!(m.cents(), 150025);
        assert!(serde_json::from_str::<Money>("\"oops\"").is_err());
    }
}
