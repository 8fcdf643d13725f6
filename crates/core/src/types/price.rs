//! Type-safe money representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a US dollar amount.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// Zero US dollars.
    #[must_use]
    pub const fn zero() -> Self {
        Self::usd(Decimal::ZERO)
    }

    /// Format for display in the en-US locale (e.g., `$1,234.50`, `-$5.00`).
    ///
    /// Amounts are rounded to cents, half away from zero.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        // `{:.2}` always yields "<digits>.<two digits>" for a rounded decimal
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        format!(
            "{sign}{}{}.{cents}",
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Insert `,` separators every three digits of an unsigned digit string.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::CAD => "CA$",
            Self::AUD => "A$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn usd(s: &str) -> Money {
        Money::usd(Decimal::from_str(s).expect("decimal"))
    }

    #[test]
    fn test_display_basic() {
        assert_eq!(usd("19.99").display(), "$19.99");
        assert_eq!(usd("200").display(), "$200.00");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(usd("1234.5").display(), "$1,234.50");
        assert_eq!(usd("981.35").display(), "$981.35");
        assert_eq!(usd("1000000").display(), "$1,000,000.00");
    }

    #[test]
    fn test_display_rounding_and_sign() {
        assert_eq!(usd("2.005").display(), "$2.01");
        assert_eq!(usd("-5").display(), "-$5.00");
        assert_eq!(usd("-0.001").display(), "$0.00");
    }

    #[test]
    fn test_other_currencies() {
        let eur = Money::new(Decimal::from(12), CurrencyCode::EUR);
        assert_eq!(eur.display(), "€12.00");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("65802"), "65,802");
        assert_eq!(group_thousands("367"), "367");
        assert_eq!(group_thousands(""), "");
    }
}
