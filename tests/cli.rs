use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env("RUST_LOG", "off");
    cmd
}

fn add(data_dir: &TempDir, description: &str, amount: &str, category: &str, date: &str) {
    expenses(data_dir)
        .args(["add", description, amount, "-c", category, "-d", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:"));
}

fn stored_ids(data_dir: &TempDir) -> Vec<i64> {
    let blob = std::fs::read_to_string(data_dir.path().join("data").join("expenses.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn add_then_list_month() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    add(&dir, "Rent", "1200", "Bills", "2024-02-01");

    expenses(&dir)
        .args(["list", "-m", "March"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("$4.50"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn empty_month_shows_placeholder() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["list", "--month", "july"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));

    expenses(&dir)
        .args(["summary", "-m", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available"));
}

#[test]
fn missing_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["add", "Coffee", "", "-c", "General", "-d", "2024-03-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount is required"));

    assert!(!dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn summary_and_monthly() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", "dining-out", "2024-03-05");
    add(&dir, "Lunch", "11.25", "Dining out", "2024-03-12");
    add(&dir, "Bus", "2", "Transportation", "2024-05-01");

    expenses(&dir)
        .args(["summary", "-m", "mar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Summary: March"))
        .stdout(predicate::str::contains("Total Spent: $15.75"))
        .stdout(predicate::str::contains("Dining out"));

    expenses(&dir)
        .arg("monthly")
        .assert()
        .success()
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("December"))
        .stdout(predicate::str::contains("$2.00"));
}

#[test]
fn export_writes_month_csv() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    add(&dir, "Rent", "1200", "Bills", "2024-02-01");

    expenses(&dir)
        .args(["export", "-m", "March", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses for March"));

    let csv = std::fs::read_to_string(out.path().join("expenses-March.csv")).unwrap();
    assert_eq!(
        csv,
        "Description,Amount,Category,Date\n\"Coffee\",4.5,\"Dining out\",2024-03-05"
    );
}

#[test]
fn delete_by_id() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    add(&dir, "Tea", "3", "Dining out", "2024-03-06");

    let ids = stored_ids(&dir);
    assert_eq!(ids.len(), 2);

    expenses(&dir)
        .args(["delete", &ids[1].to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Coffee"));

    assert_eq!(stored_ids(&dir), vec![ids[0]]);

    expenses(&dir)
        .args(["delete", &ids[1].to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn reset_requires_yes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    let blob = dir.path().join("data").join("expenses.json");

    expenses(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert!(blob.exists());

    expenses(&dir).args(["reset", "--yes"]).assert().success();
    assert!(!blob.exists());
}

#[test]
fn corrupt_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("expenses.json"), "{ definitely not a list").unwrap();

    expenses(&dir)
        .args(["list", "-m", "March"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));

    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    assert_eq!(stored_ids(&dir).len(), 1);
}

#[test]
fn invalid_month_is_usage_error() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["list", "-m", "Smarch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown month"));
}

#[test]
fn config_currency_is_persisted() {
    let dir = TempDir::new().unwrap();

    expenses(&dir)
        .args(["config", "--currency", "€"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: €"));
    assert!(dir.path().join("config.json").exists());

    add(&dir, "Coffee", "4.5", "Dining out", "2024-03-05");
    expenses(&dir)
        .args(["list", "-m", "March"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€4.50"));
}

#[test]
fn export_counts_multiline_description_once() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    add(&dir, "line1\nline2", "4.5", "General", "2024-03-05");

    expenses(&dir)
        .args(["export", "-m", "March", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses for March"));
}
