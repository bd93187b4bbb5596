use super::money::{Months, Payment, Principal, Rate, parse_decimal};
use super::operation::Operation;
use super::ports::FieldSource;
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Two plain numbers for the arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: Decimal,
    pub b: Decimal,
}

/// A principal accruing a rate over a fixed number of months.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    pub principal: Principal,
    pub rate: Rate,
    pub months: Months,
}

/// A principal with a single-period rate applied to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedAmount {
    pub principal: Principal,
    pub rate: Rate,
}

/// An outstanding balance retired by a fixed monthly payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debt {
    pub principal: Principal,
    pub rate: Rate,
    pub payment: Payment,
}

impl Debt {
    /// Validates just the fields a debt payoff needs.
    pub fn from_fields<F: FieldSource + ?Sized>(fields: &F) -> Result<Self> {
        Ok(Self {
            principal: Principal::new(required(fields, "principal")?)?,
            rate: rate(fields),
            payment: Payment::new(required(fields, "payment")?)?,
        })
    }
}

/// A validated request, carrying exactly the inputs its operation needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationRequest {
    Sum(Operands),
    Subtract(Operands),
    Multiply(Operands),
    Divide(Operands),
    SimpleInterest(Loan),
    CompoundInterest(Loan),
    Installment(Loan),
    Discount(RatedAmount),
    MonthlyYield(RatedAmount),
    DebtPayoff(Debt),
}

impl CalculationRequest {
    /// Classifies the operation tag and validates the fields it requires.
    pub fn validate<F: FieldSource + ?Sized>(operation: &str, fields: &F) -> Result<Self> {
        let operation: Operation = operation.parse()?;
        Self::from_fields(operation, fields)
    }

    /// Validates the fields for an already classified operation.
    pub fn from_fields<F: FieldSource + ?Sized>(operation: Operation, fields: &F) -> Result<Self> {
        let request = match operation {
            Operation::Sum => Self::Sum(operands(fields)?),
            Operation::Subtract => Self::Subtract(operands(fields)?),
            Operation::Multiply => Self::Multiply(operands(fields)?),
            Operation::Divide => Self::Divide(operands(fields)?),
            Operation::SimpleInterest => Self::SimpleInterest(loan(fields)?),
            Operation::CompoundInterest => Self::CompoundInterest(loan(fields)?),
            Operation::Installment => Self::Installment(loan(fields)?),
            Operation::Discount => Self::Discount(rated_amount(fields)?),
            Operation::MonthlyYield => Self::MonthlyYield(rated_amount(fields)?),
            Operation::DebtPayoff => Self::DebtPayoff(Debt::from_fields(fields)?),
        };
        Ok(request)
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Sum(_) => Operation::Sum,
            Self::Subtract(_) => Operation::Subtract,
            Self::Multiply(_) => Operation::Multiply,
            Self::Divide(_) => Operation::Divide,
            Self::SimpleInterest(_) => Operation::SimpleInterest,
            Self::CompoundInterest(_) => Operation::CompoundInterest,
            Self::Installment(_) => Operation::Installment,
            Self::Discount(_) => Operation::Discount,
            Self::MonthlyYield(_) => Operation::MonthlyYield,
            Self::DebtPayoff(_) => Operation::DebtPayoff,
        }
    }

    /// Renders the request back into raw fields.
    ///
    /// Validating the rendering yields the same request again.
    pub fn to_fields(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        match self {
            Self::Sum(o) | Self::Subtract(o) | Self::Multiply(o) | Self::Divide(o) => {
                fields.insert("a", o.a.to_string());
                fields.insert("b", o.b.to_string());
            }
            Self::SimpleInterest(l) | Self::CompoundInterest(l) | Self::Installment(l) => {
                fields.insert("principal", l.principal.value().to_string());
                fields.insert("rate", l.rate.percent().to_string());
                fields.insert("months", l.months.get().to_string());
            }
            Self::Discount(r) | Self::MonthlyYield(r) => {
                fields.insert("principal", r.principal.value().to_string());
                fields.insert("rate", r.rate.percent().to_string());
            }
            Self::DebtPayoff(d) => {
                fields.insert("principal", d.principal.value().to_string());
                fields.insert("rate", d.rate.percent().to_string());
                fields.insert("payment", d.payment.value().to_string());
            }
        }
        fields
    }
}

fn required<F: FieldSource + ?Sized>(fields: &F, name: &'static str) -> Result<Decimal> {
    fields
        .field(name)
        .as_deref()
        .and_then(parse_decimal)
        .ok_or(CalcError::MissingField(name))
}

fn rate<F: FieldSource + ?Sized>(fields: &F) -> Rate {
    fields
        .field("rate")
        .as_deref()
        .and_then(parse_decimal)
        .map(Rate::from_percent)
        .unwrap_or(Rate::ZERO)
}

fn operands<F: FieldSource + ?Sized>(fields: &F) -> Result<Operands> {
    Ok(Operands {
        a: required(fields, "a")?,
        b: required(fields, "b")?,
    })
}

fn loan<F: FieldSource + ?Sized>(fields: &F) -> Result<Loan> {
    Ok(Loan {
        principal: Principal::new(required(fields, "principal")?)?,
        rate: rate(fields),
        months: Months::from_decimal(required(fields, "months")?)?,
    })
}

fn rated_amount<F: FieldSource + ?Sized>(fields: &F) -> Result<RatedAmount> {
    Ok(RatedAmount {
        principal: Principal::new(required(fields, "principal")?)?,
        rate: rate(fields),
    })
}
