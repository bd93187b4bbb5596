use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of calculations the engine knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Divide,
    SimpleInterest,
    CompoundInterest,
    Installment,
    Discount,
    MonthlyYield,
    DebtPayoff,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Sum,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::SimpleInterest,
        Operation::CompoundInterest,
        Operation::Installment,
        Operation::Discount,
        Operation::MonthlyYield,
        Operation::DebtPayoff,
    ];

    /// Canonical tag, as echoed back in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::SimpleInterest => "simple_interest",
            Operation::CompoundInterest => "compound_interest",
            Operation::Installment => "installment",
            Operation::Discount => "discount",
            Operation::MonthlyYield => "monthly_yield",
            Operation::DebtPayoff => "debt_payoff",
        }
    }

    /// Tag used by the Portuguese-language front end.
    pub fn legacy_tag(self) -> &'static str {
        match self {
            Operation::Sum => "soma",
            Operation::Subtract => "subtracao",
            Operation::Multiply => "multiplicacao",
            Operation::Divide => "divisao",
            Operation::SimpleInterest => "juros_simples",
            Operation::CompoundInterest => "juros_compostos",
            Operation::Installment => "parcelamento",
            Operation::Discount => "desconto",
            Operation::MonthlyYield => "rendimento_mensal",
            Operation::DebtPayoff => "quitacao_divida",
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Tags are matched case-insensitively after trimming.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let tag = raw.trim().to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == tag || op.legacy_tag() == tag)
            .ok_or_else(|| CalcError::InvalidOperation(raw.trim().to_string()))
    }
}

impl TryFrom<String> for Operation {
    type Error = CalcError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
