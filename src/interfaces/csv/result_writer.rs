use crate::error::Result;
use crate::interfaces::json::CalculationResponse;
use serde::Serialize;
use std::io::Write;

/// One output row of a batch run, numbered by its position among the data
/// records of the input (the header is not counted).
///
/// `result` holds the JSON-encoded result on success and the error message on
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub row: u64,
    pub operation: String,
    pub status: &'static str,
    pub result: String,
}

impl BatchRecord {
    pub fn from_response(row: u64, requested: &str, response: &CalculationResponse) -> Result<Self> {
        let record = match response {
            CalculationResponse::Success { operation, result } => Self {
                row,
                operation: operation.to_string(),
                status: "ok",
                result: serde_json::to_string(result)?,
            },
            CalculationResponse::Failure { error, kind } => Self {
                row,
                operation: requested.to_string(),
                status: *kind,
                result: error.clone(),
            },
        };
        Ok(record)
    }

    /// A row that could not be read at all.
    pub fn unreadable(row: u64, message: impl Into<String>) -> Self {
        Self {
            row,
            operation: String::new(),
            status: "unreadable",
            result: message.into(),
        }
    }
}

/// Writes batch results as CSV.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, record: &BatchRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
