//! Month-by-month simulation of a fixed payment retiring an interest-bearing
//! debt.
//!
//! Interest and balance are rounded to cents every month, the way installment
//! billing does it, so the schedule reproduces to the cent regardless of how
//! long it runs.

use crate::domain::money::round_cents;
use crate::domain::operation::Operation;
use crate::domain::outcome::PayoffSummary;
use crate::domain::request::Debt;
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

/// One billed month of a payoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoffStep {
    pub month: u32,
    /// Interest charged on the balance carried into the month.
    pub interest: Decimal,
    /// Amount actually paid; the last payment only covers what is owed.
    pub payment: Decimal,
    /// Part of the payment that went to the balance.
    pub principal: Decimal,
    /// Balance carried into the next month.
    pub balance: Decimal,
}

/// The full amortization trace of a debt, with its totals.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffSchedule {
    steps: Vec<PayoffStep>,
    summary: PayoffSummary,
}

fn overflow() -> CalcError {
    CalcError::ArithmeticOverflow {
        operation: Operation::DebtPayoff,
    }
}

impl PayoffSchedule {
    /// Runs the simulation until the balance reaches zero.
    ///
    /// Fails with [`CalcError::PaymentTooLow`] as soon as a month's interest is
    /// at least the payment, and with [`CalcError::ExceedsMaxTerm`] when the
    /// debt is still open after `max_term_months`.
    pub fn simulate(debt: &Debt, max_term_months: u32) -> Result<Self> {
        let payment = debt.payment.value();
        let rate = debt.rate.fraction();

        let mut balance = debt.principal.value();
        let mut steps = Vec::new();
        let mut total_interest = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;
        let mut month: u32 = 0;

        while balance > Decimal::ZERO {
            if month >= max_term_months {
                return Err(CalcError::ExceedsMaxTerm {
                    max_months: max_term_months,
                });
            }
            month += 1;

            let interest = round_cents(balance.checked_mul(rate).ok_or_else(overflow)?);
            if payment <= interest {
                return Err(CalcError::PaymentTooLow { payment, interest });
            }

            let owed = interest.checked_add(balance).ok_or_else(overflow)?;
            let paid = payment.min(owed);
            let principal = paid.checked_sub(interest).ok_or_else(overflow)?;
            balance = round_cents(balance.checked_sub(principal).ok_or_else(overflow)?);

            total_interest = total_interest
                .checked_add(interest)
                .ok_or_else(overflow)?;
            total_paid = total_paid.checked_add(paid).ok_or_else(overflow)?;

            trace!(month, %interest, payment = %paid, %balance, "payoff step");
            steps.push(PayoffStep {
                month,
                interest,
                payment: paid,
                principal,
                balance,
            });
        }

        Ok(Self {
            steps,
            summary: PayoffSummary {
                months: month,
                total_interest,
                total_paid,
            },
        })
    }

    pub fn steps(&self) -> &[PayoffStep] {
        &self.steps
    }

    pub fn summary(&self) -> PayoffSummary {
        self.summary
    }
}
