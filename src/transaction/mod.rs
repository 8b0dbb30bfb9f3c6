//! The transactions page: the full table, and the delete proxy endpoint.
//!
//! This module contains:
//! - The page shell and its spinner loading state
//! - The table fragment handler and its HTML rendering
//! - The endpoint that forwards a delete to the finance API

mod delete_endpoint;
mod transactions_page;
mod view;

pub use delete_endpoint::delete_transaction_endpoint;
pub use transactions_page::{get_transactions_page, get_transactions_table};
