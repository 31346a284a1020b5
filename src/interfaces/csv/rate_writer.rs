use crate::domain::rate::InterestRate;
use crate::error::Result;
use std::io::Write;

/// Writes interest rates as CSV: `maturity_period,interest_rate,last_updated`.
pub struct RateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_rates(&mut self, rates: &[InterestRate]) -> Result<()> {
        if rates.is_empty() {
            self.writer
                .write_record(["maturity_period", "interest_rate", "last_updated"])?;
        }
        for rate in rates {
            self.writer.serialize(rate)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
