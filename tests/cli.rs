//! Tests for the `kenya-payroll` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn kenya_payroll() -> Command {
    let mut cmd = Command::cargo_bin("kenya-payroll").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    kenya_payroll()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("menu"))
        .stdout(predicate::str::contains("payslip"))
        .stdout(predicate::str::contains("quadratic"));
}

#[test]
fn test_menu_is_default_command() {
    kenya_payroll()
        .write_stdin("1\nE001\nAlice\n80000\n10000\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("========== PAYROLL MENU =========="))
        .stdout(predicate::str::contains("Net Salary       : 68011.65"))
        .stdout(predicate::str::contains("Exiting payroll system..."));
}

#[test]
fn test_menu_ends_cleanly_on_closed_stdin() {
    kenya_payroll()
        .arg("menu")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter choice: "));
}

#[test]
fn test_payslip_text() {
    kenya_payroll()
        .args([
            "payslip",
            "--id",
            "E001",
            "--name",
            "Alice",
            "--basic",
            "80000",
            "--allowances",
            "10000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PAYE             : 17238.35"))
        .stdout(predicate::str::contains("Net Salary       : 68011.65"));
}

#[test]
fn test_payslip_json() {
    let output = kenya_payroll()
        .args(["payslip", "--id", "E009", "--name", "Ivy", "--basic", "90000", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["employee"]["name"], "Ivy");
    let net = Decimal::from_str(json["deductions"]["net"].as_str().unwrap()).unwrap();
    assert_eq!(net, Decimal::from_str("68011.65").unwrap());
}

#[test]
fn test_payslip_rejects_non_numeric_salary() {
    kenya_payroll()
        .args(["payslip", "--id", "E001", "--name", "Alice", "--basic", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'lots' is not a number"));
}

#[test]
fn test_payslip_rejects_negative_salary() {
    kenya_payroll()
        .args(["payslip", "--id", "E001", "--name", "Alice", "--basic", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid amount for 'basic_salary': -100 must not be negative",
        ))
        .stderr(predicate::str::contains("Usage:").not());
}

#[test]
fn test_payslip_rejects_negative_allowances() {
    kenya_payroll()
        .args([
            "payslip",
            "--id",
            "E001",
            "--name",
            "Alice",
            "--basic",
            "80000",
            "--allowances",
            "-2.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid amount for 'allowances': -2.5 must not be negative",
        ));
}

#[test]
fn test_payslip_rejects_oversized_gross() {
    kenya_payroll()
        .args([
            "payslip",
            "--id",
            "E001",
            "--name",
            "Alice",
            "--basic",
            "79228162514264337593543950335",
            "--allowances",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount for 'gross'"));
}

#[test]
fn test_quadratic_two_real_roots() {
    kenya_payroll()
        .args(["quadratic", "1", "-3", "2"])
        .assert()
        .success()
        .stdout("Two real solutions: x1 = 2, x2 = 1\n");
}

#[test]
fn test_quadratic_complex_roots() {
    kenya_payroll()
        .args(["quadratic", "1", "0", "1"])
        .assert()
        .success()
        .stdout("Two complex solutions: 0+1i and 0-1i\n");
}

#[test]
fn test_quadratic_rejects_zero_a() {
    kenya_payroll()
        .args(["quadratic", "0", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a must not be zero"));
}
