use super::money::Amount;
use super::rate::MaturityPeriod;
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;

/// A validated request to evaluate a mortgage.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageRequest {
    income: Amount,
    maturity_period: MaturityPeriod,
    loan_amount: Amount,
    home_value: Amount,
}

impl MortgageRequest {
    /// Validates raw figures, reporting every offending field at once.
    pub fn new(
        income: Decimal,
        maturity_period: i64,
        loan_amount: Decimal,
        home_value: Decimal,
    ) -> Result<Self> {
        let mut errors = Vec::new();

        let income = positive("income", income, &mut errors);
        let maturity_period = u32::try_from(maturity_period)
            .ok()
            .filter(|years| *years <= MaturityPeriod::MAX_YEARS)
            .and_then(|years| MaturityPeriod::new(years).ok());
        if maturity_period.is_none() {
            errors.push(format!(
                "maturity_period: must be between 1 and {} years",
                MaturityPeriod::MAX_YEARS
            ));
        }
        let loan_amount = positive("loan_amount", loan_amount, &mut errors);
        let home_value = positive("home_value", home_value, &mut errors);

        match (income, maturity_period, loan_amount, home_value) {
            (Some(income), Some(maturity_period), Some(loan_amount), Some(home_value)) => {
                Ok(Self {
                    income,
                    maturity_period,
                    loan_amount,
                    home_value,
                })
            }
            _ => Err(MortgageError::ValidationError(errors)),
        }
    }

    pub fn income(&self) -> Amount {
        self.income
    }

    pub fn maturity_period(&self) -> MaturityPeriod {
        self.maturity_period
    }

    pub fn loan_amount(&self) -> Amount {
        self.loan_amount
    }

    pub fn home_value(&self) -> Amount {
        self.home_value
    }
}

fn positive(field: &str, value: Decimal, errors: &mut Vec<String>) -> Option<Amount> {
    let amount = Amount::new(value).ok();
    if amount.is_none() {
        errors.push(format!("{field}: must be greater than 0"));
    }
    amount
}

/// Outcome of a mortgage evaluation.
///
/// Only a feasible mortgage carries a monthly cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MortgageResult {
    Feasible { monthly_cost: Decimal },
    Infeasible,
}

impl MortgageResult {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub fn monthly_cost(&self) -> Option<Decimal> {
        match self {
            Self::Feasible { monthly_cost } => Some(*monthly_cost),
            Self::Infeasible => None,
        }
    }
}
