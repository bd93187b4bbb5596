use crate::domain::operation::Operation;
use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CalcError {
    #[error("invalid calculator operation: {0:?}")]
    #[diagnostic(
        code(fincalc::invalid_operation),
        help(
            "expected one of: sum, subtract, multiply, divide, simple_interest, \
             compound_interest, installment, discount, monthly_yield, debt_payoff"
        )
    )]
    InvalidOperation(String),

    #[error("missing or unparsable field: {0}")]
    #[diagnostic(
        code(fincalc::missing_field),
        help("numbers may use '.' or ',' as the decimal separator")
    )]
    MissingField(&'static str),

    #[error("invalid value for field {field}: {reason}")]
    #[diagnostic(code(fincalc::invalid_field))]
    InvalidField { field: &'static str, reason: String },

    #[error("cannot divide by zero")]
    #[diagnostic(code(fincalc::division_by_zero))]
    DivisionByZero,

    #[error("monthly payment of {payment} does not exceed the {interest} of interest accruing each month")]
    #[diagnostic(
        code(fincalc::payment_too_low),
        help("raise the payment above the monthly interest, or lower the rate")
    )]
    PaymentTooLow { payment: Decimal, interest: Decimal },

    #[error("debt is not paid off within {max_months} months")]
    #[diagnostic(code(fincalc::exceeds_max_term))]
    ExceedsMaxTerm { max_months: u32 },

    #[error("{operation} result does not fit in a decimal")]
    #[diagnostic(code(fincalc::arithmetic_overflow))]
    ArithmeticOverflow { operation: Operation },

    #[error("CSV error: {0}")]
    #[diagnostic(code(fincalc::csv))]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(fincalc::json))]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(fincalc::io))]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Stable, machine-readable name of the failure class.
    ///
    /// Callers map this to whatever status their transport uses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidOperation(_) => "invalid_operation",
            Self::MissingField(_) => "missing_field",
            Self::InvalidField { .. } => "invalid_field",
            Self::DivisionByZero => "division_by_zero",
            Self::PaymentTooLow { .. } => "payment_too_low",
            Self::ExceedsMaxTerm { .. } => "exceeds_max_term",
            Self::ArithmeticOverflow { .. } => "arithmetic_overflow",
            Self::Csv(_) => "csv",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
