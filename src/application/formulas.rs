//! Closed-form formulas, one per operation.
//!
//! Every formula is a pure function of its validated input. Money amounts are
//! rounded to cents only when the final figure is produced.

use crate::domain::money::round_cents;
use crate::domain::operation::Operation;
use crate::domain::outcome::{DiscountBreakdown, InstallmentBreakdown, InterestBreakdown};
use crate::domain::request::{Loan, Operands, RatedAmount};
use crate::error::{CalcError, Result};
use rust_decimal::{Decimal, MathematicalOps};

fn overflow(operation: Operation) -> CalcError {
    CalcError::ArithmeticOverflow { operation }
}

pub fn sum(operands: &Operands) -> Result<Decimal> {
    operands
        .a
        .checked_add(operands.b)
        .ok_or_else(|| overflow(Operation::Sum))
}

pub fn subtract(operands: &Operands) -> Result<Decimal> {
    operands
        .a
        .checked_sub(operands.b)
        .ok_or_else(|| overflow(Operation::Subtract))
}

pub fn multiply(operands: &Operands) -> Result<Decimal> {
    operands
        .a
        .checked_mul(operands.b)
        .ok_or_else(|| overflow(Operation::Multiply))
}

pub fn divide(operands: &Operands) -> Result<Decimal> {
    if operands.b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    operands
        .a
        .checked_div(operands.b)
        .ok_or_else(|| overflow(Operation::Divide))
}

/// `principal × (1 + rate × months)`
pub fn simple_interest(loan: &Loan) -> Result<InterestBreakdown> {
    let principal = loan.principal.value();
    let total = loan
        .rate
        .fraction()
        .checked_mul(loan.months.as_decimal())
        .and_then(|accrued| accrued.checked_add(Decimal::ONE))
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| overflow(Operation::SimpleInterest))?;

    interest_breakdown(principal, total, Operation::SimpleInterest)
}

/// `principal × (1 + rate)^months`
pub fn compound_interest(loan: &Loan) -> Result<InterestBreakdown> {
    let principal = loan.principal.value();
    let total = Decimal::ONE
        .checked_add(loan.rate.fraction())
        .and_then(|base| base.checked_powu(u64::from(loan.months.get())))
        .and_then(|growth| principal.checked_mul(growth))
        .ok_or_else(|| overflow(Operation::CompoundInterest))?;

    interest_breakdown(principal, total, Operation::CompoundInterest)
}

fn interest_breakdown(
    principal: Decimal,
    total: Decimal,
    operation: Operation,
) -> Result<InterestBreakdown> {
    let interest = total
        .checked_sub(principal)
        .ok_or_else(|| overflow(operation))?;
    Ok(InterestBreakdown {
        total: round_cents(total),
        interest: round_cents(interest),
    })
}

/// Fixed monthly payment that retires `principal` over `months` at `rate`.
///
/// Solves `principal = P × (1 − (1+r)^−n) / r`. At `r = 0` the annuity
/// formula is undefined and the payment is a plain division.
pub fn installment(loan: &Loan) -> Result<InstallmentBreakdown> {
    let principal = loan.principal.value();
    let months = loan.months.as_decimal();

    let payment = if loan.rate.is_zero() {
        principal.checked_div(months)
    } else {
        annuity_payment(principal, loan.rate.fraction(), u64::from(loan.months.get()))
    }
    .ok_or_else(|| overflow(Operation::Installment))?;

    let total = payment
        .checked_mul(months)
        .ok_or_else(|| overflow(Operation::Installment))?;
    let interest = total
        .checked_sub(principal)
        .ok_or_else(|| overflow(Operation::Installment))?;

    Ok(InstallmentBreakdown {
        payment: round_cents(payment),
        total: round_cents(total),
        interest: round_cents(interest),
    })
}

/// `None` when the result is not representable, including the degenerate
/// `(1+r)^n = 1` with `r ≠ 0`.
fn annuity_payment(principal: Decimal, r: Decimal, months: u64) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(r)?;
    let scaled = principal.checked_mul(r)?;
    if base.abs() >= Decimal::ONE {
        // (1+r)^-n stays within [0, 1] here, so it cannot overflow
        let discount = Decimal::ONE.checked_div(base)?.checked_powu(months)?;
        scaled.checked_div(Decimal::ONE.checked_sub(discount)?)
    } else {
        let growth = base.checked_powu(months)?;
        scaled
            .checked_mul(growth)?
            .checked_div(growth.checked_sub(Decimal::ONE)?)
    }
}

/// `principal × (1 − rate)`
pub fn discount(amount: &RatedAmount) -> Result<DiscountBreakdown> {
    let principal = amount.principal.value();
    let total = Decimal::ONE
        .checked_sub(amount.rate.fraction())
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| overflow(Operation::Discount))?;
    let discount = principal
        .checked_sub(total)
        .ok_or_else(|| overflow(Operation::Discount))?;

    Ok(DiscountBreakdown {
        total: round_cents(total),
        discount: round_cents(discount),
    })
}

/// Interest earned over a single period.
pub fn monthly_yield(amount: &RatedAmount) -> Result<Decimal> {
    amount
        .principal
        .value()
        .checked_mul(amount.rate.fraction())
        .map(round_cents)
        .ok_or_else(|| overflow(Operation::MonthlyYield))
}
