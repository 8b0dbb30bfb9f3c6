//! A stand-in for the external finance API.
//!
//! The [crate::ApiClient] performs real HTTP, so tests point it at an axum
//! router bound to an ephemeral local port instead of mocking the client.

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A fake finance API running on an ephemeral local port.
pub(crate) struct FakeApi {
    /// The base URL to point an [crate::ApiClient] at.
    pub(crate) base_url: String,
}

impl FakeApi {
    /// Serve a finance API with the given canned data.
    ///
    /// `transactions`, `report` and `budgets` are the JSON bodies for the
    /// transactions list, spending report and budget status endpoints. The
    /// delete endpoint answers 200 for IDs present in `transactions` and
    /// 404 for everything else.
    pub(crate) async fn with_data(transactions: Value, report: Value, budgets: Value) -> Self {
        Self::serve(finance_router(transactions, report, budgets)).await
    }

    /// Serve an arbitrary router as the fake API.
    pub(crate) async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind fake API listener");
        let address = listener
            .local_addr()
            .expect("could not read fake API address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("fake API server stopped unexpectedly");
        });

        Self {
            base_url: format!("http://{address}"),
        }
    }
}

#[derive(Deserialize)]
struct LimitParams {
    limit: Option<usize>,
}

/// Build a router that mimics the finance API's four endpoints.
pub(crate) fn finance_router(transactions: Value, report: Value, budgets: Value) -> Router {
    let transaction_list = transactions.as_array().cloned().unwrap_or_default();
    let deletable = transaction_list.clone();

    Router::new()
        .route(
            "/transactions",
            get(move |Query(params): Query<LimitParams>| async move {
                let mut list = transaction_list;
                if let Some(limit) = params.limit {
                    list.truncate(limit);
                }
                Json(Value::Array(list))
            }),
        )
        .route(
            "/transactions/{id}",
            delete(move |Path(id): Path<i64>| async move {
                let exists = deletable.iter().any(|entry| entry["id"] == json!(id));
                if exists {
                    StatusCode::OK
                } else {
                    StatusCode::NOT_FOUND
                }
            }),
        )
        .route("/reports/spending", get(move || async move { Json(report) }))
        .route("/reports/budgets", get(move || async move { Json(budgets) }))
}

/// A transaction record as the finance API serializes it.
pub(crate) fn transaction_fixture(
    id: i64,
    amount: f64,
    transaction_type: &str,
    description: &str,
    date: &str,
) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "description": description,
        "transaction_type": transaction_type,
        "category": "General",
        "date": date,
        "user_id": 1,
    })
}

/// A spending report as the finance API serializes it.
pub(crate) fn report_fixture(total_income: f64, total_expenses: f64) -> Value {
    json!({
        "total_income": total_income,
        "total_expenses": total_expenses,
        "net_income": total_income - total_expenses,
        "category_breakdown": {"General": total_expenses},
        "period": "July 2026",
    })
}

/// A budget status record as the finance API serializes it.
pub(crate) fn budget_fixture(id: i64, name: &str, percentage_used: f64, status: &str) -> Value {
    let budget_amount = 100.0;
    let spent_amount = budget_amount * percentage_used / 100.0;

    json!({
        "budget_id": id,
        "budget_name": name,
        "budget_amount": budget_amount,
        "spent_amount": spent_amount,
        "remaining_amount": budget_amount - spent_amount,
        "percentage_used": percentage_used,
        "status": status,
    })
}
