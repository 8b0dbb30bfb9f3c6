//! The application's route URIs.
//!
//! For endpoints that take a parameter, e.g. '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the financial overview.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The fragment with the dashboard's stats and panels.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The page for displaying transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The fragment with the transaction table.
pub const TRANSACTIONS_TABLE: &str = "/transactions/table";
/// The route to delete a transaction.
pub const DELETE_TRANSACTION: &str = "/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a brace-delimited name, e.g. '{transaction_id}' in
/// '/transactions/{transaction_id}'. If `endpoint_path` has no parameter it
/// is returned unchanged. Only the first parameter is substituted.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map(|offset| start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..start],
        id,
        &endpoint_path[end..]
    )
}
