use crate::error::{MortgageError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loan duration in whole years. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MaturityPeriod(u32);

impl MaturityPeriod {
    /// Longest maturity a mortgage request may ask for.
    pub const MAX_YEARS: u32 = 30;

    pub fn new(years: u32) -> Result<Self> {
        if years > 0 {
            Ok(Self(years))
        } else {
            Err(MortgageError::validation(
                "Maturity period must be at least 1 year",
            ))
        }
    }

    pub fn years(&self) -> u32 {
        self.0
    }

    /// Number of monthly installments. Widened so no year count can overflow.
    pub fn months(&self) -> u64 {
        u64::from(self.0) * 12
    }
}

impl TryFrom<u32> for MaturityPeriod {
    type Error = MortgageError;

    fn try_from(years: u32) -> Result<Self> {
        Self::new(years)
    }
}

impl From<MaturityPeriod> for u32 {
    fn from(period: MaturityPeriod) -> Self {
        period.0
    }
}

impl fmt::Display for MaturityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The annual interest rate currently offered for one maturity period.
///
/// Rates are never edited in place; a reload builds fresh values and swaps
/// the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRate {
    maturity_period: MaturityPeriod,
    #[serde(rename = "interest_rate")]
    annual_rate_percent: Decimal,
    last_updated: DateTime<Utc>,
}

impl InterestRate {
    pub fn new(
        maturity_period: MaturityPeriod,
        annual_rate_percent: Decimal,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            maturity_period,
            annual_rate_percent,
            last_updated,
        }
    }

    pub fn maturity_period(&self) -> MaturityPeriod {
        self.maturity_period
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
