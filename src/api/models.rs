//! The wire models served by the external finance API.
//!
//! Every derived field (remaining amounts, percentages, net income) is
//! computed by the API. This app only holds ephemeral copies for display
//! and never recomputes or mutates them.

use std::collections::BTreeMap;

use serde::Deserialize;
use time::Date;

/// Alias for the integer type used for transaction identifiers.
pub type TransactionId = i64;

/// Alias for the integer type used for budget identifiers.
pub type BudgetId = i64;

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned, always non-negative on the
    /// wire. The sign shown to the user comes from `transaction_type`.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// Whether the transaction brings money in or takes money out.
    pub transaction_type: TransactionType,
    /// The category label the transaction is filed under.
    pub category: String,
    /// The day the transaction happened, an ISO `YYYY-MM-DD` date on the wire.
    pub date: Date,
    /// The ID of the user the transaction belongs to.
    pub user_id: i64,
}

/// Whether a transaction is money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionType {
    /// The label shown in the transaction table's type badge.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// A server-computed aggregate of income, expenses and the per-category
/// breakdown for a reporting period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpendingReport {
    /// Sum of all income in the period.
    pub total_income: f64,
    /// Sum of all expenses in the period.
    pub total_expenses: f64,
    /// `total_income - total_expenses`, computed by the API.
    pub net_income: f64,
    /// Aggregate amount per category label.
    pub category_breakdown: BTreeMap<String, f64>,
    /// A human-readable label for the reporting period.
    pub period: String,
}

/// The display form of a budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BudgetStatus {
    /// The ID of the budget.
    pub budget_id: BudgetId,
    /// The name the user gave the budget.
    pub budget_name: String,
    /// The spending cap for the period.
    pub budget_amount: f64,
    /// How much has been spent against the cap so far.
    pub spent_amount: f64,
    /// `budget_amount - spent_amount`, computed by the API.
    pub remaining_amount: f64,
    /// `spent_amount / budget_amount * 100`, computed by the API. May
    /// exceed 100 for budgets that have been blown.
    pub percentage_used: f64,
    /// How the budget is tracking against its cap.
    pub status: BudgetHealth,
}

/// How a budget is tracking against its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    /// Spending is in line with the budgeted amount.
    OnTrack,
    /// Spending has exceeded the budgeted amount.
    OverBudget,
    /// Spending is comfortably below the budgeted amount.
    UnderBudget,
}

impl BudgetHealth {
    /// The badge text: the wire name with underscores replaced by spaces.
    pub fn label(self) -> &'static str {
        match self {
            BudgetHealth::OnTrack => "on track",
            BudgetHealth::OverBudget => "over budget",
            BudgetHealth::UnderBudget => "under budget",
        }
    }
}
