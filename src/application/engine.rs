use crate::application::pricing::{Feasibility, MortgagePolicy};
use crate::domain::mortgage::{MortgageRequest, MortgageResult};
use crate::domain::ports::RateStoreBox;
use crate::domain::rate::InterestRate;
use crate::error::{MortgageError, Result};

/// The entry point for evaluating mortgage requests.
///
/// `MortgageEngine` combines the affordability rules with the rate store.
/// It keeps no per-request state, so a single engine can be shared by
/// concurrent callers.
pub struct MortgageEngine {
    policy: MortgagePolicy,
    rate_store: RateStoreBox,
}

impl MortgageEngine {
    /// Creates a new `MortgageEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `policy` - The affordability rules and pricing.
    /// * `rate_store` - The store holding the current interest rates.
    pub fn new(policy: MortgagePolicy, rate_store: RateStoreBox) -> Self {
        Self { policy, rate_store }
    }

    /// Evaluates a single mortgage request.
    ///
    /// Infeasible requests return without touching the rate store. A feasible
    /// request for a maturity with no configured rate fails with
    /// `MortgageError::RateNotConfigured`; no other rate is substituted.
    pub async fn evaluate(&self, request: &MortgageRequest) -> Result<MortgageResult> {
        if let Feasibility::Infeasible(rejection) = self.policy.assess(request) {
            tracing::debug!(?rejection, "mortgage request rejected");
            return Ok(MortgageResult::Infeasible);
        }

        let maturity = request.maturity_period();
        let Some(rate) = self.rate_store.get(maturity).await? else {
            tracing::warn!(maturity = maturity.years(), "no interest rate configured");
            return Err(MortgageError::RateNotConfigured(maturity.years()));
        };

        let monthly_cost = self.policy.monthly_cost(request.loan_amount(), &rate)?;
        tracing::debug!(%monthly_cost, maturity = maturity.years(), "mortgage request accepted");
        Ok(MortgageResult::Feasible { monthly_cost })
    }

    /// Returns the configured interest rates, ascending by maturity period.
    pub async fn interest_rates(&self) -> Result<Vec<InterestRate>> {
        let mut rates = self.rate_store.all().await?;
        rates.sort_by_key(|rate| rate.maturity_period());
        Ok(rates)
    }
}
