use rust_decimal::Decimal;
use serde::Serialize;

/// What a calculation produces: a bare number or a labeled breakdown.
///
/// Decimals serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationResult {
    Scalar(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Breakdown(Breakdown),
}

impl CalculationResult {
    pub fn as_scalar(&self) -> Option<Decimal> {
        match self {
            CalculationResult::Scalar(value) => Some(*value),
            CalculationResult::Breakdown(_) => None,
        }
    }

    pub fn as_breakdown(&self) -> Option<&Breakdown> {
        match self {
            CalculationResult::Scalar(_) => None,
            CalculationResult::Breakdown(breakdown) => Some(breakdown),
        }
    }
}

/// The fixed set of labeled results, one shape per family of operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Breakdown {
    Interest(InterestBreakdown),
    Installment(InstallmentBreakdown),
    Discount(DiscountBreakdown),
    Payoff(PayoffSummary),
}

/// Result of simple and compound interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterestBreakdown {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest: Decimal,
}

/// Result of an amortized installment plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InstallmentBreakdown {
    /// The fixed monthly payment.
    #[serde(rename = "parcela", with = "rust_decimal::serde::float")]
    pub payment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "juros", with = "rust_decimal::serde::float")]
    pub interest: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountBreakdown {
    /// Price after the discount.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Amount taken off.
    #[serde(rename = "desconto", with = "rust_decimal::serde::float")]
    pub discount: Decimal,
}

/// Outcome of a debt payoff simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffSummary {
    #[serde(rename = "meses")]
    pub months: u32,
    #[serde(rename = "juros_total", with = "rust_decimal::serde::float")]
    pub total_interest: Decimal,
    #[serde(rename = "total_pago", with = "rust_decimal::serde::float")]
    pub total_paid: Decimal,
}

impl From<Breakdown> for CalculationResult {
    fn from(breakdown: Breakdown) -> Self {
        CalculationResult::Breakdown(breakdown)
    }
}

impl From<Decimal> for CalculationResult {
    fn from(value: Decimal) -> Self {
        CalculationResult::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_scalar_serializes_as_number() {
        let result = CalculationResult::Scalar(dec!(12.5));
        assert_eq!(serde_json::to_string(&result).unwrap(), "12.5");
    }

    #[test]
    fn test_breakdowns_use_labeled_keys() {
        let result: CalculationResult = Breakdown::Installment(InstallmentBreakdown {
            payment: dec!(100),
            total: dec!(1200),
            interest: dec!(0),
        })
        .into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["parcela"], 100.0);
        assert_eq!(json["total"], 1200.0);
        assert_eq!(json["juros"], 0.0);

        let result: CalculationResult = Breakdown::Payoff(PayoffSummary {
            months: 6,
            total_interest: dec!(31.12),
            total_paid: dec!(1031.12),
        })
        .into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["meses"], 6);
        assert!(json["meses"].is_u64());
        assert_eq!(json["juros_total"], 31.12);
        assert_eq!(json["total_pago"], 1031.12);
    }

    #[test]
    fn test_accessors() {
        let scalar = CalculationResult::from(dec!(3));
        assert_eq!(scalar.as_scalar(), Some(dec!(3)));
        assert!(scalar.as_breakdown().is_none());
    }
}
