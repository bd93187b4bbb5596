use crate::domain::ports::FieldSource;
use crate::error::{CalcError, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::io::Read;

/// One row of a batch file. Columns an operation does not use may be left
/// empty or omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RequestRow {
    pub operation: String,
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
    #[serde(default)]
    pub principal: Option<String>,
    #[serde(default)]
    pub rate: Option<String>,
    #[serde(default)]
    pub months: Option<String>,
    #[serde(default)]
    pub payment: Option<String>,
}

impl FieldSource for RequestRow {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "a" => &self.a,
            "b" => &self.b,
            "principal" => &self.principal,
            "rate" => &self.rate,
            "months" => &self.months,
            "payment" => &self.payment,
            _ => return None,
        };
        value.as_deref().map(Cow::Borrowed)
    }
}

/// Reads a batch of calculation requests laid out one per CSV row.
///
/// Columns are matched by header name, so their order is free. Trailing
/// columns an operation does not use may be left off a row entirely.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// One item per data row. A row that cannot be decoded yields an error
    /// without ending the iteration.
    pub fn requests(self) -> impl Iterator<Item = Result<RequestRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalcError::from))
    }
}
