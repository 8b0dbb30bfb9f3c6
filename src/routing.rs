//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get},
};

use crate::{
    AppState,
    dashboard::{get_dashboard_content, get_dashboard_page},
    endpoints,
    not_found::get_404_not_found,
    transaction::{delete_transaction_endpoint, get_transactions_page, get_transactions_table},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CONTENT, get(get_dashboard_content))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS_TABLE, get(get_transactions_table))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
