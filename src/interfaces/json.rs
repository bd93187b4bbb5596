use crate::application::calculator::Calculator;
use crate::domain::operation::Operation;
use crate::domain::outcome::CalculationResult;
use crate::domain::ports::FieldSource;
use crate::domain::request::CalculationRequest;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An inbound request: the operation tag plus its fields, each a string or a
/// number.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationEnvelope {
    #[serde(default)]
    pub operation: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Accepts either a single request object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeBatch {
    Many(Vec<CalculationEnvelope>),
    One(CalculationEnvelope),
}

impl EnvelopeBatch {
    pub fn into_vec(self) -> Vec<CalculationEnvelope> {
        match self {
            EnvelopeBatch::Many(envelopes) => envelopes,
            EnvelopeBatch::One(envelope) => vec![envelope],
        }
    }
}

/// Outbound response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResponse {
    Success {
        operation: Operation,
        result: CalculationResult,
    },
    Failure {
        error: String,
        #[serde(skip)]
        kind: &'static str,
    },
}

impl CalculationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, CalculationResponse::Success { .. })
    }

    /// Failure class of an error response, `None` on success.
    pub fn error_kind(&self) -> Option<&'static str> {
        match self {
            CalculationResponse::Success { .. } => None,
            CalculationResponse::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Validates and computes one envelope, folding any failure into the response.
pub fn respond(calculator: &Calculator, envelope: &CalculationEnvelope) -> CalculationResponse {
    respond_to(calculator, &envelope.operation, &envelope.fields)
}

/// Same as [`respond`] for any field source, e.g. a CSV row or CLI flags.
pub fn respond_to<F: FieldSource + ?Sized>(
    calculator: &Calculator,
    operation: &str,
    fields: &F,
) -> CalculationResponse {
    match evaluate(calculator, operation, fields) {
        Ok((operation, result)) => CalculationResponse::Success { operation, result },
        Err(e) => CalculationResponse::Failure {
            error: e.to_string(),
            kind: e.kind(),
        },
    }
}

fn evaluate<F: FieldSource + ?Sized>(
    calculator: &Calculator,
    operation: &str,
    fields: &F,
) -> Result<(Operation, CalculationResult)> {
    let request = CalculationRequest::validate(operation, fields)?;
    let result = calculator.execute(&request)?;
    Ok((request.operation(), result))
}

/// Parses a JSON document holding one request or an array of requests.
pub fn parse_envelopes(input: &str) -> Result<Vec<CalculationEnvelope>> {
    let batch: EnvelopeBatch = serde_json::from_str(input)?;
    Ok(batch.into_vec())
}
