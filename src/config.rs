use crate::application::pricing::MortgagePolicy;
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Startup configuration: the affordability multiplier and the rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MortgageConfig {
    #[serde(default = "default_income_multiplier")]
    pub income_multiplier: u32,
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

/// One configured rate, as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateEntry {
    pub maturity_period: u32,
    pub interest_rate: Decimal,
}

fn default_income_multiplier() -> u32 {
    MortgagePolicy::DEFAULT_INCOME_MULTIPLIER
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            income_multiplier: default_income_multiplier(),
            rates: Vec::new(),
        }
    }
}

impl MortgageConfig {
    /// Loads and validates a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| MortgageError::ConfigError(format!("TOML parsing error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.income_multiplier == 0 {
            return Err(MortgageError::ConfigError(
                "income_multiplier must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.rates {
            if entry.maturity_period == 0 {
                return Err(MortgageError::ConfigError(
                    "rates.maturity_period must be greater than 0".to_string(),
                ));
            }
            if !seen.insert(entry.maturity_period) {
                return Err(MortgageError::ConfigError(format!(
                    "duplicate interest rate for maturity period = {} years",
                    entry.maturity_period
                )));
            }
        }
        Ok(())
    }

    pub fn policy(&self) -> MortgagePolicy {
        MortgagePolicy::new(self.income_multiplier)
    }
}
