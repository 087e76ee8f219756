use colored::Colorize;
use std::fmt::Write;

use crate::currency::CurrencyFormat;
use crate::domain::{
    category_color, ChangeDirection, Expense, PercentageChange, PeriodReport, PeriodSelection,
};

const BAR_WIDTH: usize = 20;
const CATEGORY_COLUMN: usize = 16;

/// Presentation preferences shared by every renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub color: bool,
    pub currency: CurrencyFormat,
}

impl RenderOptions {
    pub fn plain(currency: CurrencyFormat) -> Self {
        Self {
            color: false,
            currency,
        }
    }

    fn money(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    fn paint_change(&self, change: PercentageChange, direction: ChangeDirection) -> String {
        let text = format!("{change} {direction}");
        if !self.color {
            return text;
        }
        match direction {
            ChangeDirection::Increase => text.as_str().red().to_string(),
            ChangeDirection::Decrease => text.as_str().green().to_string(),
        }
    }

    fn paint_category(&self, padded: String, category: &str) -> String {
        if !self.color {
            return padded;
        }
        match hex_rgb(category_color(category)) {
            Some((r, g, b)) => padded.as_str().truecolor(r, g, b).to_string(),
            None => padded,
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Renders the dashboard summary: totals, comparison and ranked categories.
///
/// Previous-period figures are omitted when the report has nothing to compare against.
pub fn render_report(report: &PeriodReport, options: &RenderOptions) -> String {
    let mut out = String::new();
    let compare = report.has_comparison();

    let title = match report.selection {
        PeriodSelection::All => format!("Expense Summary: {}", report.selection),
        _ => format!(
            "Expense Summary: {} ({})",
            report.selection, report.windows.current
        ),
    };
    let _ = writeln!(out, "{}", options.heading(&title));
    let _ = writeln!(out, "Total Expenses: {}", options.money(report.current.total));
    if compare {
        let _ = writeln!(
            out,
            "Previous period: {} ({})",
            options.money(report.previous.total),
            report.windows.previous
        );
        let _ = writeln!(
            out,
            "{}",
            options.paint_change(report.total_change, report.total_direction)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", options.heading("Expenses by Category:"));
    if report.categories.is_empty() {
        let _ = writeln!(out, "No expenses found for the current or previous period.");
        return out;
    }
    for row in &report.categories {
        let name = options.paint_category(
            format!("{:<width$}", row.category, width = CATEGORY_COLUMN),
            &row.category,
        );
        let mut line = format!(
            "  {name} {:>12}  [{}]",
            options.money(row.current),
            bar(row.share_of_max)
        );
        if compare {
            let _ = write!(
                line,
                "  Previous: {}  {}",
                options.money(row.previous),
                options.paint_change(row.change, row.direction)
            );
        }
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Renders expenses one per line, in the order given.
pub fn render_expense_list(
    expenses: &[&Expense],
    selection: &PeriodSelection,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", options.heading(&format!("Expenses: {selection}")));
    if expenses.is_empty() {
        let _ = writeln!(out, "No expenses found for the selected period.");
        return out;
    }
    for expense in expenses {
        let category = options.paint_category(expense.category.clone(), &expense.category);
        let _ = writeln!(
            out,
            "{}  {:>12}  {}  {}  ({})",
            expense.date,
            options.money(expense.amount),
            category,
            expense.description,
            expense.id
        );
    }
    out
}

fn bar(share: f64) -> String {
    let filled = ((share.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
