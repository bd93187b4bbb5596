use fincalc::application::calculator::Calculator;
use fincalc::domain::outcome::{Breakdown, CalculationResult, PayoffSummary};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

#[tokio::test]
async fn test_calculator_shared_across_tasks() {
    let calculator = Calculator::new();

    let handles: Vec<_> = (0..32)
        .map(|_| {
            tokio::spawn(async move {
                let fields =
                    BTreeMap::from([("principal", "1000"), ("rate", "1"), ("payment", "200")]);
                calculator.calculate("debt_payoff", &fields).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert_eq!(
            result,
            CalculationResult::Breakdown(Breakdown::Payoff(PayoffSummary {
                months: 6,
                total_interest: dec!(31.12),
                total_paid: dec!(1031.12),
            }))
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_independent_requests_do_not_interact() {
    let calculator = Calculator::new();

    let handles: Vec<_> = (1..=20u32)
        .map(|months| {
            tokio::spawn(async move {
                let months_text = months.to_string();
                let fields = BTreeMap::from([
                    ("principal", "1200"),
                    ("months", months_text.as_str()),
                ]);
                (months, calculator.calculate("installment", &fields).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (months, result) = handle.await.unwrap();
        let Some(Breakdown::Installment(plan)) = result.as_breakdown() else {
            panic!("expected an installment breakdown, got {result:?}");
        };
        assert_eq!(plan.total, dec!(1200), "months {months}");
    }
}
