//! The client for the external finance API.
//!
//! This module contains:
//! - [ApiClient], a thin HTTP client for the remote service that owns all
//!   finance data
//! - The wire models the API serves: [Transaction], [SpendingReport] and
//!   [BudgetStatus]

mod client;
mod models;

pub use client::ApiClient;
pub use models::{
    BudgetHealth, BudgetId, BudgetStatus, SpendingReport, Transaction, TransactionId,
    TransactionType,
};
