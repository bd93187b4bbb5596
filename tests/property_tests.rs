use fincalc::application::calculator::Calculator;
use fincalc::domain::outcome::Breakdown;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, MathematicalOps};
use std::collections::BTreeMap;

fn fields(pairs: &[(&'static str, String)]) -> BTreeMap<&'static str, String> {
    pairs.iter().cloned().collect()
}

#[test]
fn test_sum_matches_decimal_addition() {
    let mut rng = StdRng::seed_from_u64(11);
    let calculator = Calculator::new();

    for _ in 0..500 {
        let a = Decimal::new(rng.gen_range(-1_000_000_000i64..1_000_000_000), rng.gen_range(0..6));
        let b = Decimal::new(rng.gen_range(-1_000_000_000i64..1_000_000_000), rng.gen_range(0..6));
        let result = calculator
            .calculate("sum", &fields(&[("a", a.to_string()), ("b", b.to_string())]))
            .unwrap();
        assert_eq!(result.as_scalar(), Some(a + b), "{a} + {b}");
    }
}

#[test]
fn test_installment_payment_retires_the_principal() {
    let mut rng = StdRng::seed_from_u64(42);
    let calculator = Calculator::new();

    for _ in 0..300 {
        let principal = Decimal::new(rng.gen_range(100..100_000_000), 2);
        let rate = Decimal::new(rng.gen_range(1..=500), 2);
        let months: u32 = rng.gen_range(1..=360);

        let result = calculator
            .calculate(
                "installment",
                &fields(&[
                    ("principal", principal.to_string()),
                    ("rate", rate.to_string()),
                    ("months", months.to_string()),
                ]),
            )
            .unwrap();
        let Some(Breakdown::Installment(plan)) = result.as_breakdown() else {
            panic!("expected an installment breakdown, got {result:?}");
        };

        let r = rate / Decimal::ONE_HUNDRED;
        let discount = (Decimal::ONE / (Decimal::ONE + r)).powu(u64::from(months));
        let present_value = plan.payment * (Decimal::ONE - discount) / r;

        // The payment is rounded to the cent, and each of the n payments
        // carries at most half a cent of that rounding
        let tolerance = Decimal::new(5, 3) * Decimal::from(months) + Decimal::new(1, 2);
        assert!(
            (present_value - principal).abs() <= tolerance,
            "principal {principal}, rate {rate}, months {months}: payment {} is worth {present_value}",
            plan.payment
        );
    }
}

#[test]
fn test_payoff_totals_balance() {
    let mut rng = StdRng::seed_from_u64(7);
    let calculator = Calculator::new();

    for _ in 0..200 {
        let principal = Decimal::new(rng.gen_range(1..50_000_000), 2);
        let rate = Decimal::new(rng.gen_range(0..=300), 2);
        // Interest plus at least 2% of the principal keeps the term short
        let interest = (principal * rate / Decimal::ONE_HUNDRED).round_dp(2);
        let payment = interest + (principal / Decimal::from(50)).round_dp(2) + Decimal::ONE;

        let result = calculator
            .calculate(
                "debt_payoff",
                &fields(&[
                    ("principal", principal.to_string()),
                    ("rate", rate.to_string()),
                    ("payment", payment.to_string()),
                ]),
            )
            .unwrap();
        let Some(Breakdown::Payoff(summary)) = result.as_breakdown() else {
            panic!("expected a payoff breakdown, got {result:?}");
        };

        assert!(summary.months >= 1);
        assert!(summary.months <= 50, "took {} months", summary.months);
        assert_eq!(summary.total_paid, principal + summary.total_interest);
        assert!(summary.total_paid <= payment * Decimal::from(summary.months));
    }
}
