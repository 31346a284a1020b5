use crate::domain::mortgage::{MortgageRequest, MortgageResult};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const HEADER: [&str; 6] = [
    "income",
    "maturity_period",
    "loan_amount",
    "home_value",
    "feasible",
    "monthly_cost",
];

#[derive(Serialize)]
struct ResultRecord {
    income: Decimal,
    maturity_period: u32,
    loan_amount: Decimal,
    home_value: Decimal,
    feasible: bool,
    monthly_cost: Option<Decimal>,
}

/// Writes one CSV row per evaluated request, echoing the request next to its
/// outcome. The header is written up front so an empty run still produces it.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, request: &MortgageRequest, result: &MortgageResult) -> Result<()> {
        self.writer.serialize(ResultRecord {
            income: request.income().value(),
            maturity_period: request.maturity_period().years(),
            loan_amount: request.loan_amount().value(),
            home_value: request.home_value().value(),
            feasible: result.is_feasible(),
            monthly_cost: result.monthly_cost(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
