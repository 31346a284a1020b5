use crate::domain::ports::RateStore;
use crate::domain::rate::{InterestRate, MaturityPeriod};
use crate::error::{MortgageError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type RateTable = BTreeMap<MaturityPeriod, InterestRate>;

/// A thread-safe in-memory rate table.
///
/// The table sits behind `Arc<RwLock<Arc<RateTable>>>`: readers clone the inner
/// `Arc` and release the lock at once, `replace_all` builds the new table first
/// and only takes the write lock to swap the pointer. A reader therefore sees
/// either the old table or the new one, never a mix.
///
/// `Clone` shares the underlying table.
#[derive(Default, Clone)]
pub struct InMemoryRateStore {
    table: Arc<RwLock<Arc<RateTable>>>,
}

impl InMemoryRateStore {
    /// Creates a new, empty in-memory rate store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn snapshot(&self) -> Arc<RateTable> {
        Arc::clone(&*self.table.read().await)
    }
}

#[async_trait]
impl RateStore for InMemoryRateStore {
    async fn all(&self) -> Result<Vec<InterestRate>> {
        Ok(self.snapshot().await.values().cloned().collect())
    }

    async fn get(&self, maturity: MaturityPeriod) -> Result<Option<InterestRate>> {
        Ok(self.snapshot().await.get(&maturity).cloned())
    }

    async fn replace_all(&self, rates: Vec<InterestRate>) -> Result<()> {
        let mut table = RateTable::new();
        for rate in rates {
            let maturity = rate.maturity_period();
            if table.insert(maturity, rate).is_some() {
                return Err(MortgageError::ConfigError(format!(
                    "duplicate interest rate for maturity period = {maturity} years"
                )));
            }
        }

        let table = Arc::new(table);
        *self.table.write().await = table;
        Ok(())
    }
}
