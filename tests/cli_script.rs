use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_core_cli").unwrap();
    cmd.env("RUST_LOG", "off")
        .arg("--home")
        .arg(home)
        .arg("--no-color");
    cmd
}

fn add(home: &std::path::Path, description: &str, amount: &str, date: &str, category: &str) {
    cli(home)
        .args([
            "add",
            "--description",
            description,
            "--amount",
            amount,
            "--date",
            date,
            "--category",
            category,
        ])
        .assert()
        .success()
        .stdout(contains("Expense recorded: "));
}

#[test]
fn add_then_summarise_a_month() {
    let home = tempdir().unwrap();
    add(home.path(), "Lunch", "100", "2024-03-05", "Food");
    add(home.path(), "Lunch", "50", "2024-02-10", "Food");

    cli(home.path())
        .args(["summary", "--period", "thisMonth", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(contains("Expense Summary: This Month (2024-03-01 .. 2024-03-15)"))
        .stdout(contains("Total Expenses: $100.00"))
        .stdout(contains("Previous period: $50.00"))
        .stdout(contains("+100.00% increase"));

    let json = std::fs::read_to_string(home.path().join("expenses.json")).unwrap();
    assert!(json.contains("\"Lunch\""));
}

#[test]
fn custom_bounds_select_a_custom_period() {
    let home = tempdir().unwrap();
    add(home.path(), "Cinema", "12.5", "2024-01-15", "Entertainment");

    cli(home.path())
        .args(["summary", "--from", "2024-01-10", "--to", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Custom Period (2024-01-10 to 2024-01-20)"))
        .stdout(contains("Previous period: $0.00 (2023-12-30 .. 2024-01-09)"))
        .stdout(contains("N/A (new expense) increase"));
}

#[test]
fn list_shows_latest_first_and_remove_deletes() {
    let home = tempdir().unwrap();
    add(home.path(), "Bus", "2.5", "2024-03-02", "Transportation");
    add(home.path(), "Dinner", "30", "2024-03-09", "Food");

    let output = cli(home.path())
        .args(["list", "--period", "thisMonth", "--today", "2024-03-15"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let dinner = stdout.find("Dinner").unwrap();
    let bus = stdout.find("Bus").unwrap();
    assert!(dinner < bus);

    let id = stdout
        .lines()
        .find(|line| line.contains("Bus"))
        .and_then(|line| line.rsplit('(').next())
        .map(|tail| tail.trim_end_matches(')').to_string())
        .unwrap();
    cli(home.path())
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(contains("Expense removed: Bus"));

    cli(home.path())
        .args(["list", "--period", "thisMonth", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(contains("Dinner").and(contains("Bus").not()));
}

#[test]
fn invalid_input_fails_with_message() {
    let home = tempdir().unwrap();
    cli(home.path())
        .args([
            "add",
            "--description",
            "Refund",
            "--amount=-5",
            "--date",
            "2024-03-02",
            "--category",
            "Other",
        ])
        .assert()
        .failure()
        .stderr(contains("error:"));

    cli(home.path())
        .args(["remove", "missing-id"])
        .assert()
        .failure()
        .stderr(contains("missing-id"));
}

#[test]
fn about_prints_build_information() {
    let home = tempdir().unwrap();
    cli(home.path())
        .arg("about")
        .assert()
        .success()
        .stdout(contains("expense_core"));
}

#[test]
fn config_set_changes_default_period_and_currency() {
    let home = tempdir().unwrap();
    add(home.path(), "Snacks", "12", "2024-03-14", "Food");

    cli(home.path())
        .args(["config", "set", "default_period", "7days"])
        .assert()
        .success()
        .stdout(contains("Default period: Last 7 Days (7days)"));
    cli(home.path())
        .args(["config", "set", "locale", "de-DE"])
        .assert()
        .success();
    cli(home.path())
        .args(["config", "set", "currency", "EUR"])
        .assert()
        .success();
    assert!(home.path().join("config").join("config.json").exists());

    cli(home.path())
        .args(["summary", "--today", "2024-03-15"])
        .assert()
        .success()
        .stdout(contains("Expense Summary: Last 7 Days (2024-03-09 .. 2024-03-15)"))
        .stdout(contains("Total Expenses: €12,00"));

    cli(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Locale: de-DE"))
        .stdout(contains("Currency: EUR"));
}

#[test]
fn config_rejects_unknown_keys() {
    let home = tempdir().unwrap();
    cli(home.path())
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(contains("unknown key `theme`"));
    assert!(!home.path().join("config").join("config.json").exists());
}

#[test]
fn home_directory_comes_from_environment() {
    let home = tempdir().unwrap();
    Command::cargo_bin("expense_core_cli")
        .unwrap()
        .env("EXPENSE_CORE_HOME", home.path())
        .env("RUST_LOG", "off")
        .args([
            "--no-color",
            "add",
            "--description",
            "Ticket",
            "--amount",
            "9",
            "--date",
            "2024-03-02",
            "--category",
            "Entertainment",
        ])
        .assert()
        .success();
    let json = std::fs::read_to_string(home.path().join("expenses.json")).unwrap();
    assert!(json.contains("\"Ticket\""));
}
