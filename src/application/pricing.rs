use crate::domain::money::Amount;
use crate::domain::mortgage::MortgageRequest;
use crate::domain::rate::InterestRate;
use crate::error::{MortgageError, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept for the monthly rate.
const RATE_SCALE: u32 = 10;
/// Fractional digits of a monthly cost.
const COST_SCALE: u32 = 2;

/// The affordability rule that turned a request down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Loan exceeds the income multiplied by the configured multiplier.
    IncomeMultiplierExceeded,
    /// Loan exceeds the value of the home.
    HomeValueExceeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    Feasible,
    Infeasible(Rejection),
}

/// Affordability rules and annuity pricing.
///
/// Holds no state beyond its configuration, so one instance can serve any
/// number of concurrent evaluations.
#[derive(Debug, Clone, Copy)]
pub struct MortgagePolicy {
    income_multiplier: u32,
}

impl Default for MortgagePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCOME_MULTIPLIER)
    }
}

impl MortgagePolicy {
    pub const DEFAULT_INCOME_MULTIPLIER: u32 = 4;

    pub fn new(income_multiplier: u32) -> Self {
        Self { income_multiplier }
    }

    pub fn income_multiplier(&self) -> u32 {
        self.income_multiplier
    }

    /// Checks the income rule, then the home value rule, stopping at the first
    /// one that fails. Equality passes both rules.
    pub fn assess(&self, request: &MortgageRequest) -> Feasibility {
        let loan = request.loan_amount().value();

        // An overflowing cap is larger than any representable loan.
        let within_income = request
            .income()
            .value()
            .checked_mul(Decimal::from(self.income_multiplier))
            .is_none_or(|cap| loan <= cap);
        if !within_income {
            tracing::warn!(
                multiplier = self.income_multiplier,
                "Loan amount exceeds {} times the income",
                self.income_multiplier
            );
            return Feasibility::Infeasible(Rejection::IncomeMultiplierExceeded);
        }

        if loan > request.home_value().value() {
            tracing::warn!("Loan amount exceeds home value");
            return Feasibility::Infeasible(Rejection::HomeValueExceeded);
        }

        Feasibility::Feasible
    }

    pub fn is_feasible(&self, request: &MortgageRequest) -> bool {
        self.assess(request) == Feasibility::Feasible
    }

    /// Computes the fixed monthly installment for `loan_amount` at `rate`.
    ///
    /// The monthly rate is derived in decimal arithmetic at 10 fractional
    /// digits; only the power term of the annuity formula is evaluated in
    /// `f64`. The result is rounded half-up to exactly two decimals.
    pub fn monthly_cost(&self, loan_amount: Amount, rate: &InterestRate) -> Result<Decimal> {
        let total_months = rate.maturity_period().months();
        let loan = loan_amount.value();
        let monthly_rate = monthly_rate(rate);

        if monthly_rate.is_zero() {
            return Ok(to_cents(loan / Decimal::from(total_months)));
        }

        let principal = loan.to_f64().ok_or_else(|| {
            MortgageError::CalculationError(format!("loan amount {loan} is out of range"))
        })?;
        let r = monthly_rate.to_f64().ok_or_else(|| {
            MortgageError::CalculationError(format!("monthly rate {monthly_rate} is out of range"))
        })?;
        let n = total_months as f64;

        let installment = principal * r / (1.0 - (1.0 + r).powf(-n));
        let installment = Decimal::from_f64(installment).ok_or_else(|| {
            MortgageError::CalculationError(format!(
                "annuity for loan {loan} at {}% over {total_months} months is not finite",
                rate.annual_rate_percent()
            ))
        })?;

        Ok(to_cents(installment))
    }
}

fn monthly_rate(rate: &InterestRate) -> Decimal {
    let annual_rate = half_up(rate.annual_rate_percent() / Decimal::ONE_HUNDRED, RATE_SCALE);
    half_up(annual_rate / Decimal::from(12), RATE_SCALE)
}

fn half_up(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

fn to_cents(value: Decimal) -> Decimal {
    let mut cents = half_up(value, COST_SCALE);
    cents.rescale(COST_SCALE);
    cents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate::MaturityPeriod;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn request(income: Decimal, loan: Decimal, home: Decimal) -> MortgageRequest {
        MortgageRequest::new(income, 30, loan, home).unwrap()
    }

    fn rate(years: u32, percent: Decimal) -> InterestRate {
        InterestRate::new(MaturityPeriod::new(years).unwrap(), percent, Utc::now())
    }

    fn amount(value: Decimal) -> Amount {
        Amount::new(value).unwrap()
    }

    /// Annuity written out independently of `monthly_cost`.
    fn annuity_oracle(loan: Decimal, years: u32, percent: Decimal) -> Decimal {
        let n = f64::from(years * 12);
        let annual = (percent / dec!(100))
            .round_dp_with_strategy(10, RoundingStrategy::MidpointAwayFromZero);
        let monthly =
            (annual / dec!(12)).round_dp_with_strategy(10, RoundingStrategy::MidpointAwayFromZero);
        let r = monthly.to_f64().unwrap();
        let p = loan.to_f64().unwrap();
        let m = p * r / (1.0 - (1.0 + r).powf(-n));
        Decimal::from_f64(m)
            .unwrap()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    #[test]
    fn test_feasible_when_both_rules_pass() {
        let policy = MortgagePolicy::default();
        let req = request(dec!(60000), dec!(200000), dec!(220000));
        assert!(policy.is_feasible(&req));
    }

    #[test]
    fn test_income_rule_fails() {
        let policy = MortgagePolicy::default();
        let req = request(dec!(60000), dec!(250000), dec!(300000));
        assert_eq!(
            policy.assess(&req),
            Feasibility::Infeasible(Rejection::IncomeMultiplierExceeded)
        );
    }

    #[test]
    fn test_home_value_rule_fails() {
        let policy = MortgagePolicy::default();
        let req = request(dec!(100000), dec!(260000), dec!(200000));
        assert_eq!(
            policy.assess(&req),
            Feasibility::Infeasible(Rejection::HomeValueExceeded)
        );
    }

    #[test]
    fn test_income_rule_checked_first() {
        let policy = MortgagePolicy::default();
        // Both rules fail; only the income rule is reported.
        let req = request(dec!(10000), dec!(500000), dec!(100000));
        assert_eq!(
            policy.assess(&req),
            Feasibility::Infeasible(Rejection::IncomeMultiplierExceeded)
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let policy = MortgagePolicy::default();
        assert!(policy.is_feasible(&request(dec!(60000), dec!(240000), dec!(300000))));
        assert!(policy.is_feasible(&request(dec!(80000), dec!(200000), dec!(200000))));
    }

    #[test]
    fn test_custom_multiplier() {
        let policy = MortgagePolicy::new(5);
        assert_eq!(policy.income_multiplier(), 5);
        assert!(policy.is_feasible(&request(dec!(60000), dec!(300000), dec!(300000))));
        assert!(!MortgagePolicy::default()
            .is_feasible(&request(dec!(60000), dec!(300000), dec!(300000))));
    }

    #[test]
    fn test_huge_income_does_not_overflow() {
        let policy = MortgagePolicy::new(u32::MAX);
        let req = request(Decimal::MAX, dec!(200000), dec!(200000));
        assert!(policy.is_feasible(&req));
    }

    #[test]
    fn test_zero_interest_is_straight_amortization() {
        let policy = MortgagePolicy::default();
        let cost = policy
            .monthly_cost(amount(dec!(200000)), &rate(30, Decimal::ZERO))
            .unwrap();
        assert_eq!(cost, dec!(555.56));
        assert_eq!(cost.scale(), 2);
    }

    #[test]
    fn test_known_annuity_value() {
        let policy = MortgagePolicy::default();
        let cost = policy
            .monthly_cost(amount(dec!(200000)), &rate(30, dec!(6.0)))
            .unwrap();
        assert_eq!(cost, dec!(1199.10));
    }

    #[test]
    fn test_positive_interest_matches_annuity_formula() {
        let policy = MortgagePolicy::default();
        let cases = [
            (dec!(200000), 30, dec!(6.0)),
            (dec!(120000), 30, dec!(6.0)),
            (dec!(150000), 20, dec!(5.0)),
            (dec!(100000), 10, dec!(7.25)),
        ];

        for (loan, years, percent) in cases {
            let actual = policy.monthly_cost(amount(loan), &rate(years, percent)).unwrap();
            assert_eq!(
                actual,
                annuity_oracle(loan, years, percent),
                "loan={loan} years={years} rate={percent}"
            );
        }
    }

    #[test]
    fn test_rounding_keeps_two_decimals() {
        let policy = MortgagePolicy::default();
        let loan = dec!(123456.78);
        let actual = policy.monthly_cost(amount(loan), &rate(25, dec!(3.3333))).unwrap();
        assert_eq!(actual.scale(), 2);

        let zero_rate = policy.monthly_cost(amount(loan), &rate(25, Decimal::ZERO)).unwrap();
        assert!(actual > zero_rate);
    }

    #[test]
    fn test_whole_number_cost_is_padded_to_cents() {
        let policy = MortgagePolicy::default();
        let cost = policy
            .monthly_cost(amount(dec!(36000)), &rate(30, Decimal::ZERO))
            .unwrap();
        assert_eq!(cost.to_string(), "100.00");
    }

    #[test]
    fn test_cost_midpoint_rounds_up() {
        let policy = MortgagePolicy::default();
        // 0.06 / 12 = 0.005 and 0.30 / 12 = 0.025 sit exactly between two cents.
        let cost = policy
            .monthly_cost(amount(dec!(0.06)), &rate(1, Decimal::ZERO))
            .unwrap();
        assert_eq!(cost, dec!(0.01));
        let cost = policy
            .monthly_cost(amount(dec!(0.30)), &rate(1, Decimal::ZERO))
            .unwrap();
        assert_eq!(cost, dec!(0.03));
        assert_eq!(to_cents(dec!(2.345)), dec!(2.35));
    }

    #[test]
    fn test_monthly_rate_midpoint_rounds_up() {
        // 0.0600000006 / 12 = 0.00500000005, one digit past the rate scale.
        assert_eq!(monthly_rate(&rate(10, dec!(6.00000006))), dec!(0.0050000001));
        // 0.0000000006 / 12 = 0.00000000005 must not collapse to a zero rate.
        assert_eq!(monthly_rate(&rate(10, dec!(0.00000006))), dec!(0.0000000001));
        assert_eq!(monthly_rate(&rate(30, dec!(6.0))), dec!(0.005));
    }

    #[test]
    fn test_very_long_maturity_does_not_overflow() {
        let policy = MortgagePolicy::default();
        let long = rate(400_000_000, dec!(3.5));
        let cost = policy.monthly_cost(amount(dec!(1000)), &long).unwrap();
        // The discount term vanishes, leaving interest only: 1000 * 0.0029166667.
        assert_eq!(cost, dec!(2.92));

        let zero = rate(400_000_000, Decimal::ZERO);
        let cost = policy.monthly_cost(amount(dec!(1000)), &zero).unwrap();
        assert_eq!(cost, dec!(0.00));
        assert_eq!(cost.scale(), 2);
    }
}
