use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir")
        .arg(dir.path())
        .env_remove("EXPENSE_TRACKER_DATA_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, category: &str, date: &str) {
    expense(dir)
        .args(["add", description, amount, category, "--date", date])
        .assert()
        .success();
}

#[test]
fn add_then_balance_and_list() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");
    add(&dir, "Bus", "2", "Transport", "2024-06-01");

    expense(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹5.50"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").and(predicate::str::contains("Bus")));
}

#[test]
fn expenses_persist_as_json_array() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");

    let raw = std::fs::read_to_string(dir.path().join("data").join("expense.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["description"], "Coffee");
    assert_eq!(records[0]["amount"], 3.5);
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(records[0]["date"], "2024-05-01");
}

#[test]
fn rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "Coffee", "0", "Food", "--date", "2024-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    expense(&dir)
        .args(["add", "Coffee", "-3", "Food", "--date", "2024-05-01"])
        .assert()
        .failure();

    expense(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹0.00"));
}

#[test]
fn delete_unknown_id_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");

    expense(&dir)
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense with ID 42"));

    expense(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹3.50"));
}

#[test]
fn month_filter_restricts_views() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");
    add(&dir, "Bus", "2.00", "Transport", "2024-06-01");

    expense(&dir)
        .args(["--month", "2024-05", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹3.50"));

    expense(&dir)
        .args(["--month", "2024-06", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport").and(predicate::str::contains("Food").not()));
}

#[test]
fn months_keep_first_seen_order() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Rent", "500", "Housing", "2024-06-01");
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");
    add(&dir, "Lunch", "8", "Food", "2024-06-15");

    expense(&dir)
        .arg("months")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Show All Months.*June 2024.*May 2024").unwrap());
}

#[test]
fn report_writes_text_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");
    let output = dir.path().join("report.txt");

    expense(&dir)
        .args(["report", "--format", "text", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with("Smart Expense Tracker Report\n"));
    assert!(contents.contains("1. Coffee - ₹3.50"));
    assert!(contents.contains("Total Expenses: ₹3.50"));
}

#[test]
fn history_lists_adds_and_deletes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-05-01");

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}
