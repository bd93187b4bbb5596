use super::formulas;
use super::payoff::PayoffSchedule;
use crate::config::CalculatorConfig;
use crate::domain::outcome::{Breakdown, CalculationResult};
use crate::domain::ports::FieldSource;
use crate::domain::request::{CalculationRequest, Debt};
use crate::error::Result;
use tracing::debug;

/// The main entry point for financial calculations.
///
/// `Calculator` validates raw requests and routes them to the matching formula.
/// It holds nothing but its configuration, so one instance can be shared
/// freely across threads and tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Calculator` with custom tunables.
    ///
    /// # Arguments
    ///
    /// * `config` - Limits applied to iterative calculations.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validates a raw request and computes it.
    ///
    /// This is all-or-nothing: a failure at validation or computation yields no
    /// partial result.
    pub fn calculate<F: FieldSource + ?Sized>(
        &self,
        operation: &str,
        fields: &F,
    ) -> Result<CalculationResult> {
        let request = CalculationRequest::validate(operation, fields)?;
        self.execute(&request)
    }

    /// Computes an already validated request.
    pub fn execute(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        debug!(operation = %request.operation(), "dispatching calculation");

        let result: CalculationResult = match request {
            CalculationRequest::Sum(ops) => formulas::sum(ops)?.into(),
            CalculationRequest::Subtract(ops) => formulas::subtract(ops)?.into(),
            CalculationRequest::Multiply(ops) => formulas::multiply(ops)?.into(),
            CalculationRequest::Divide(ops) => formulas::divide(ops)?.into(),
            CalculationRequest::SimpleInterest(loan) => {
                Breakdown::Interest(formulas::simple_interest(loan)?).into()
            }
            CalculationRequest::CompoundInterest(loan) => {
                Breakdown::Interest(formulas::compound_interest(loan)?).into()
            }
            CalculationRequest::Installment(loan) => {
                Breakdown::Installment(formulas::installment(loan)?).into()
            }
            CalculationRequest::Discount(amount) => {
                Breakdown::Discount(formulas::discount(amount)?).into()
            }
            CalculationRequest::MonthlyYield(amount) => formulas::monthly_yield(amount)?.into(),
            CalculationRequest::DebtPayoff(debt) => {
                Breakdown::Payoff(self.payoff_schedule(debt)?.summary()).into()
            }
        };
        Ok(result)
    }

    /// Simulates a debt payoff and returns every billed month.
    pub fn payoff_schedule(&self, debt: &Debt) -> Result<PayoffSchedule> {
        PayoffSchedule::simulate(debt, self.config.max_term_months())
    }
}
