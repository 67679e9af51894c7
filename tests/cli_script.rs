mod common;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::{piped_command, script_command, HEADER};

#[test]
fn menu_is_printed_and_exit_succeeds() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(
            contains("Personal Budget Tracker")
                .and(contains("1. Add Income"))
                .and(contains("5. Clear All Data"))
                .and(contains("6. Exit"))
                .and(contains("Exiting...")),
        );
    dir.child("data.csv").assert(predicates::path::missing());
}

#[test]
fn add_income_and_expense_then_summarize() {
    let dir = TempDir::new().unwrap();
    let script = "\
1
Salary
January pay
3000
2
Groceries
Weekly shop
54.30
3
6
";
    script_command(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Income added successfully.")
                .and(contains("Expense added successfully."))
                .and(contains("Total Income: 3000.00"))
                .and(contains("Total Expenses: 54.30"))
                .and(contains("Net Savings: 2945.70")),
        );

    let data = dir.child("data.csv");
    data.assert(predicates::str::starts_with(format!("{HEADER}\n")));
    data.assert(contains(",Salary,January pay,3000.0,Income"));
    data.assert(contains(",Groceries,Weekly shop,54.3,Expense"));
}

#[test]
fn visualize_renders_text_chart_in_script_mode() {
    let dir = TempDir::new().unwrap();
    dir.child("data.csv")
        .write_str(&format!(
            "{HEADER}\n\
             2024-01-15,Food,Lunch,30,Expense\n\
             2024-01-16,Food,Dinner,20,Expense\n\
             2024-01-17,Rent,January,500,Expense\n\
             2024-01-01,Salary,January pay,3000,Income\n"
        ))
        .unwrap();

    script_command(&dir)
        .write_stdin("4\n6\n")
        .assert()
        .success()
        .stdout(
            contains("Expenses by Category")
                .and(contains("Category | Amount Spent"))
                .and(contains(" 50.00"))
                .and(contains(" 500.00"))
                .and(contains("Salary").not()),
        );
}

#[test]
fn visualize_with_no_expenses_reports_nothing_to_show() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("1\nSalary\nPay\n100\n4\n6\n")
        .assert()
        .success()
        .stdout(
            contains("No expenses to visualize.").and(contains("Expenses by Category").not()),
        );
}

#[test]
fn clear_empties_the_data_file() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("2\nRent\nMarch\n900\n5\n3\n6\n")
        .assert()
        .success()
        .stdout(
            contains("All data has been cleared.")
                .and(contains("Total Income: 0.00"))
                .and(contains("Total Expenses: 0.00")),
        );

    dir.child("data.csv").assert("");
}

#[test]
fn invalid_option_reprompts() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("9\nhello\n6\n")
        .assert()
        .success()
        .stdout(contains("Invalid option. Please try again.").and(contains("Exiting...")));
}

#[test]
fn blank_and_padded_choices_are_invalid_options() {
    let dir = TempDir::new().unwrap();
    let output = script_command(&dir)
        .write_stdin("\n 1 \n6\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("Invalid option. Please try again.").count(), 2);
    assert!(!stdout.contains("Enter income category"));
    dir.child("data.csv").assert(predicates::path::missing());
}

#[test]
fn piped_stdin_without_script_switch_runs_scripted() {
    let dir = TempDir::new().unwrap();
    piped_command(&dir)
        .write_stdin("1\nSalary\nPay\n100\n3\n6\n")
        .assert()
        .success()
        .stdout(contains("Income added successfully.").and(contains("Total Income: 100.00")));

    dir.child("data.csv")
        .assert(contains(",Salary,Pay,100.0,Income"));
}

#[test]
fn non_numeric_amount_fails_the_process() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("2\nFood\nLunch\ntwelve\n6\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:").and(contains("twelve")));

    dir.child("data.csv").assert(predicates::path::missing());
}

#[test]
fn malformed_data_file_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    dir.child("data.csv")
        .write_str(&format!("{HEADER}\n2024-01-15,Food,Lunch,abc,Expense\n"))
        .unwrap();

    script_command(&dir)
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(contains("Parse error on row 1"));
}

#[test]
fn session_resumes_from_existing_file() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("1\nSalary\nPay\n1200\n6\n")
        .assert()
        .success();

    script_command(&dir)
        .write_stdin("2\nFood\nLunch\n200\n3\n6\n")
        .assert()
        .success()
        .stdout(contains("Total Income: 1200.00").and(contains("Net Savings: 1000.00")));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    script_command(&dir)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(contains("Exiting..."));
}
