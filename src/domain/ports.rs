use super::rate::{InterestRate, MaturityPeriod};
use crate::error::Result;
use async_trait::async_trait;

/// Holds the interest rate currently offered per maturity period.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Every known rate, ascending by maturity period.
    async fn all(&self) -> Result<Vec<InterestRate>>;
    /// Exact-match lookup; `None` when no rate is configured for `maturity`.
    async fn get(&self, maturity: MaturityPeriod) -> Result<Option<InterestRate>>;
    /// Discards the current table and installs `rates` in one step.
    async fn replace_all(&self, rates: Vec<InterestRate>) -> Result<()>;
}

pub type RateStoreBox = Box<dyn RateStore>;
