//! Expense reports
//!
//! Period filters, totals and the short series shown on the dashboard chart.

use chrono::{Days, Months, NaiveDate};
use std::collections::BTreeMap;

use crate::models::{Expense, ExpenseCategory};

/// Time window for listing expenses, relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpensePeriod {
    /// Everything
    #[default]
    All,
    /// The last 7 days
    Week,
    /// Since the same day last month
    Month,
    /// Since the same day last year
    Year,
    /// Between two dates, both inclusive
    Custom {
        /// First day included
        start: NaiveDate,
        /// Last day included
        end: NaiveDate,
    },
}

impl ExpensePeriod {
    /// Whether an expense dated `date` falls inside the period
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let since = match *self {
            ExpensePeriod::All => return true,
            ExpensePeriod::Custom { start, end } => return date >= start && date <= end,
            ExpensePeriod::Week => today.checked_sub_days(Days::new(7)),
            ExpensePeriod::Month => today.checked_sub_months(Months::new(1)),
            ExpensePeriod::Year => today.checked_sub_months(Months::new(12)),
        };
        since.map_or(true, |since| date >= since)
    }
}

/// Expenses inside `period`, newest first
pub fn filter_expenses(
    expenses: &[Expense],
    period: ExpensePeriod,
    today: NaiveDate,
) -> Vec<Expense> {
    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| period.contains(e.date, today))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Sum of all amounts
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of amounts per category
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    totals
}

/// One point of the dashboard spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Day label, `dd/mm`
    pub label: String,
    /// Amount spent
    pub amount: f64,
}

/// The last `count` expenses in stored order, as chart points
pub fn recent_chart_points(expenses: &[Expense], count: usize) -> Vec<ChartPoint> {
    let start = expenses.len().saturating_sub(count);
    expenses[start..]
        .iter()
        .map(|e| ChartPoint {
            label: e.date.format("%d/%m").to_string(),
            amount: e.amount,
        })
        .collect()
}
