use crate::config::RateEntry;
use crate::domain::ports::RateStore;
use crate::domain::rate::{InterestRate, MaturityPeriod};
use crate::error::{MortgageError, Result};
use chrono::{DateTime, Utc};

/// Installs configured interest rates into a `RateStore`.
pub struct RateLoader<'a> {
    entries: &'a [RateEntry],
}

impl<'a> RateLoader<'a> {
    pub fn new(entries: &'a [RateEntry]) -> Self {
        Self { entries }
    }

    /// Loads the rates stamped with the current time.
    pub async fn load(&self, store: &dyn RateStore) -> Result<usize> {
        self.load_at(store, Utc::now()).await
    }

    /// Replaces the store's table with the configured rates, all stamped with
    /// `timestamp`. An empty configuration leaves the store untouched.
    pub async fn load_at(&self, store: &dyn RateStore, timestamp: DateTime<Utc>) -> Result<usize> {
        if self.entries.is_empty() {
            tracing::info!("no interest rates configured, rate store left unchanged");
            return Ok(0);
        }

        let rates = self
            .entries
            .iter()
            .map(|entry| -> Result<InterestRate> {
                let maturity = MaturityPeriod::new(entry.maturity_period).map_err(|_| {
                    MortgageError::ConfigError(format!(
                        "invalid maturity period {} for interest rate {}",
                        entry.maturity_period, entry.interest_rate
                    ))
                })?;
                Ok(InterestRate::new(maturity, entry.interest_rate, timestamp))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = rates.len();
        store.replace_all(rates).await?;
        tracing::info!(count, "interest rates loaded");
        Ok(count)
    }
}
