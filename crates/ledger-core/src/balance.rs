//! Income/expense aggregation.

use std::fmt;

use serde::Serialize;

use crate::entry::Entry;

/// Totals over the `Income` and `Expense` categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Balance {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

impl Balance {
    /// Sum the amounts of income and expense entries. Other categories are ignored.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let (income, expense) = entries
            .into_iter()
            .fold((0.0, 0.0), |(income, expense), entry| {
                if entry.is_income() {
                    (income + entry.amount, expense)
                } else if entry.is_expense() {
                    (income, expense + entry.amount)
                } else {
                    (income, expense)
                }
            });
        Self {
            income,
            expense,
            net: income - expense,
        }
    }

    /// `(income, expense, net)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.income, self.expense, self.net)
    }
}

impl From<Balance> for (f64, f64, f64) {
    fn from(balance: Balance) -> Self {
        balance.as_tuple()
    }
}

const REPORT_WIDTH: usize = 33;

/// Boxed report, one line per figure.
impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "=".repeat(REPORT_WIDTH);
        writeln!(f, "{}", border)?;
        for (label, value) in [
            ("Current balance", self.net),
            ("Income", self.income),
            ("Expense", self.expense),
        ] {
            let line = format!("| {}: {}", label, value);
            let pad = (REPORT_WIDTH - 1).saturating_sub(line.chars().count());
            writeln!(f, "{}{}|", line, " ".repeat(pad))?;
        }
        write!(f, "{}", border)
    }
}
