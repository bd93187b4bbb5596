use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_sum() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args(["calc", "sum", "--a", "1,5", "--b", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("{\"operation\":\"sum\",\"result\":3.5}\n"));

    Ok(())
}

#[test]
fn test_cli_compound_interest() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args([
        "calc",
        "juros_compostos",
        "--principal",
        "1000",
        "--rate",
        "10",
        "--months",
        "12",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"operation\":\"compound_interest\""))
        .stdout(predicate::str::contains("\"total\":3138.43"))
        .stdout(predicate::str::contains("\"interest\":2138.43"));
}

#[test]
fn test_cli_debt_payoff() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args([
        "calc",
        "debt_payoff",
        "--principal",
        "1000",
        "--rate",
        "1",
        "--payment",
        "200",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "{\"meses\":6,\"juros_total\":31.12,\"total_pago\":1031.12}",
    ));
}

#[test]
fn test_cli_negative_values_are_accepted() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args(["calc", "subtract", "--a", "-2", "--b", "-5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"result\":3.0"));
}

#[test]
fn test_cli_engine_error_prints_envelope_and_fails() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args(["calc", "divide", "--a", "1", "--b", "0"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::diff("{\"error\":\"cannot divide by zero\"}\n"));
}

#[test]
fn test_cli_payment_too_low() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args([
        "calc",
        "debt_payoff",
        "--principal",
        "1000",
        "--rate",
        "5",
        "--payment",
        "20",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""))
        .stdout(predicate::str::contains("does not exceed"));
}

#[test]
fn test_cli_max_term_from_env() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.env("FINCALC_MAX_TERM_MONTHS", "3").args([
        "calc",
        "debt_payoff",
        "--principal",
        "1000",
        "--rate",
        "1",
        "--payment",
        "200",
    ]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("not paid off within 3 months"));
}

#[test]
fn test_cli_rejects_zero_max_term() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args(["--max-term-months", "0", "calc", "sum", "--a", "1", "--b", "1"]);

    cmd.assert().failure().code(2);
}

#[test]
fn test_cli_unknown_operation() {
    let mut cmd = Command::new(cargo_bin!("fincalc"));
    cmd.args(["calc", "modulo", "--a", "1", "--b", "1"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("invalid calculator operation"));
}
