use std::io::{self, IsTerminal};

use crate::core::services::{CategoryTotals, Summary};

use super::{chart, output, CliMode};

pub const NOTHING_TO_SHOW: &str = "No expenses to visualize.";

/// Formats a monetary amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn summary_lines(summary: &Summary) -> [String; 3] {
    [
        format!("Total Income: {}", format_amount(summary.income)),
        format!("Total Expenses: {}", format_amount(summary.expenses)),
        format!("Net Savings: {}", format_amount(summary.net())),
    ]
}

pub fn print_summary(summary: &Summary) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

/// Charts expense totals, or reports that there is nothing to chart.
///
/// The full-screen chart is only used for interactive sessions attached to a
/// terminal; everything else gets the text rendering.
pub fn show_expenses(totals: &CategoryTotals, mode: CliMode) -> io::Result<()> {
    if totals.is_empty() {
        output::info(NOTHING_TO_SHOW);
        return Ok(());
    }

    if mode == CliMode::Interactive && io::stdout().is_terminal() {
        chart::show_bar_chart(totals)
    } else {
        for line in chart::text_chart(totals) {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_income_expenses_and_net() {
        let lines = summary_lines(&Summary {
            income: 100.0,
            expenses: 50.0,
        });
        assert_eq!(
            lines,
            [
                "Total Income: 100.00".to_string(),
                "Total Expenses: 50.00".to_string(),
                "Net Savings: 50.00".to_string(),
            ]
        );
    }

    #[test]
    fn negative_net_is_shown_with_sign() {
        let lines = summary_lines(&Summary {
            income: 10.0,
            expenses: 25.5,
        });
        assert_eq!(lines[2], "Net Savings: -15.50");
    }

    #[test]
    fn empty_totals_take_the_nothing_to_show_path() {
        show_expenses(&CategoryTotals::default(), CliMode::Interactive).unwrap();
    }
}
