use crate::domain::mortgage::MortgageRequest;
use crate::error::{MortgageError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// A request row exactly as it appears in the input file.
#[derive(Debug, Deserialize)]
struct MortgageRecord {
    income: Decimal,
    maturity_period: i64,
    loan_amount: Decimal,
    home_value: Decimal,
}

impl TryFrom<MortgageRecord> for MortgageRequest {
    type Error = MortgageError;

    fn try_from(record: MortgageRecord) -> Result<Self> {
        MortgageRequest::new(
            record.income,
            record.maturity_period,
            record.loan_amount,
            record.home_value,
        )
    }
}

/// Reads mortgage requests from a CSV source.
///
/// Expects the header `income,maturity_period,loan_amount,home_value`. Each row
/// is deserialized and validated; a bad row yields an `Err` without stopping
/// the iteration.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates requests.
    pub fn requests(self) -> impl Iterator<Item = Result<MortgageRequest>> {
        self.reader
            .into_deserialize::<MortgageRecord>()
            .map(|result| {
                result
                    .map_err(MortgageError::from)
                    .and_then(MortgageRequest::try_from)
            })
    }
}
