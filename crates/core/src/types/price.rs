//! Type-safe price representation.
//!
//! Course prices are integers in the currency's standard unit (whole
//! rupees/dollars); the payment gateway wants the amount in minor units
//! (paise/cents), which is always `price * 100`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A course price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price from whole currency units.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The price in whole currency units.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// The price in minor currency units, as the gateway expects.
    #[must_use]
    pub const fn to_minor_units(&self) -> i64 {
        self.0 * 100
    }

    /// Format for display with two decimal places (e.g., "500.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.2}", Decimal::new(self.to_minor_units(), 2))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

/// ISO 4217 currency codes accepted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl CurrencyCode {
    /// The ISO 4217 code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}
