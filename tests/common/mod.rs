#![allow(dead_code)]

use chrono::Utc;
use mortgage_check::domain::rate::{InterestRate, MaturityPeriod};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn rate(years: u32, percent: Decimal) -> InterestRate {
    InterestRate::new(MaturityPeriod::new(years).unwrap(), percent, Utc::now())
}

pub fn write_config(income_multiplier: u32, rates: &[(u32, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "income_multiplier = {income_multiplier}")?;
    for (maturity_period, interest_rate) in rates {
        writeln!(file)?;
        writeln!(file, "[[rates]]")?;
        writeln!(file, "maturity_period = {maturity_period}")?;
        writeln!(file, "interest_rate = \"{interest_rate}\"")?;
    }
    file.flush()?;
    Ok(file)
}

pub fn write_requests(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "income, maturity_period, loan_amount, home_value")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
