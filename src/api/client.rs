//! The HTTP client for the external finance API.

use reqwest::StatusCode;

use crate::Error;

use super::models::{BudgetStatus, SpendingReport, Transaction, TransactionId};

/// A thin client for the remote service that owns all finance data.
///
/// Cloning is cheap: clones share the underlying connection pool. No
/// timeouts are configured beyond the transport's defaults and failed
/// requests are never retried, callers log the error and fall back to an
/// empty view.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the finance API served at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch transactions, most recent first.
    ///
    /// `limit` caps the number of records the API returns. `None` fetches
    /// the full list.
    ///
    /// # Errors
    /// Returns an error if the API cannot be reached, answers with a
    /// non-success status, or serves a body that cannot be parsed.
    pub async fn transactions(&self, limit: Option<u32>) -> Result<Vec<Transaction>, Error> {
        let mut request = self.client.get(format!("{}/transactions", self.base_url));

        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?.error_for_status()?;

        response.json().await.map_err(Error::from)
    }

    /// Ask the finance API to delete the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingTransaction] if the API does not know
    /// the transaction, or a transport/status error otherwise.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let response = self
            .client
            .delete(format!("{}/transactions/{id}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            Err(Error::DeleteMissingTransaction)
        } else {
            Err(Error::ApiStatus(status))
        }
    }

    /// Fetch the spending report for the current period.
    ///
    /// # Errors
    /// Returns an error if the API cannot be reached, answers with a
    /// non-success status, or serves a body that cannot be parsed.
    pub async fn spending_report(&self) -> Result<SpendingReport, Error> {
        let response = self
            .client
            .get(format!("{}/reports/spending", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        response.json().await.map_err(Error::from)
    }

    /// Fetch the status of every budget for the current period.
    ///
    /// # Errors
    /// Returns an error if the API cannot be reached, answers with a
    /// non-success status, or serves a body that cannot be parsed.
    pub async fn budget_status(&self) -> Result<Vec<BudgetStatus>, Error> {
        let response = self
            .client
            .get(format!("{}/reports/budgets", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        response.json().await.map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use serde_json::json;

    use crate::{
        Error,
        api::models::{BudgetHealth, TransactionType},
        test_utils::{FakeApi, budget_fixture, report_fixture, transaction_fixture},
    };

    use super::ApiClient;

    fn sample_transactions() -> serde_json::Value {
        json!([
            transaction_fixture(1, 1200.0, "income", "Salary", "2026-07-01"),
            transaction_fixture(2, 80.5, "expense", "Groceries", "2026-07-03"),
            transaction_fixture(3, 25.0, "expense", "Petrol", "2026-07-05"),
        ])
    }

    #[tokio::test]
    async fn fetches_transactions() {
        let api = FakeApi::with_data(
            sample_transactions(),
            report_fixture(1200.0, 105.5),
            json!([]),
        )
        .await;
        let client = ApiClient::new(&api.base_url);

        let transactions = client.transactions(None).await.unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].description, "Salary");
        assert_eq!(transactions[0].transaction_type, TransactionType::Income);
        assert_eq!(transactions[1].amount, 80.5);
    }

    #[tokio::test]
    async fn forwards_limit_as_query_parameter() {
        let api = FakeApi::with_data(
            sample_transactions(),
            report_fixture(1200.0, 105.5),
            json!([]),
        )
        .await;
        let client = ApiClient::new(&api.base_url);

        let transactions = client.transactions(Some(2)).await.unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, 1);
        assert_eq!(transactions[1].id, 2);
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let api = FakeApi::with_data(sample_transactions(), json!({}), json!([])).await;
        let client = ApiClient::new(&format!("{}/", api.base_url));

        let transactions = client.transactions(None).await.unwrap();

        assert_eq!(transactions.len(), 3);
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let api = FakeApi::with_data(sample_transactions(), json!({}), json!([])).await;
        let client = ApiClient::new(&api.base_url);

        let result = client.delete_transaction(2).await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn delete_of_unknown_transaction_is_an_error() {
        let api = FakeApi::with_data(sample_transactions(), json!({}), json!([])).await;
        let client = ApiClient::new(&api.base_url);

        let result = client.delete_transaction(999).await;

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }

    #[tokio::test]
    async fn fetches_spending_report() {
        let api = FakeApi::with_data(json!([]), report_fixture(5000.0, 3200.0), json!([])).await;
        let client = ApiClient::new(&api.base_url);

        let report = client.spending_report().await.unwrap();

        assert_eq!(report.total_income, 5000.0);
        assert_eq!(report.total_expenses, 3200.0);
        assert_eq!(report.net_income, 1800.0);
    }

    #[tokio::test]
    async fn fetches_budget_status() {
        let budgets = json!([
            budget_fixture(1, "Food", 75.0, "on_track"),
            budget_fixture(2, "Going out", 120.0, "over_budget"),
        ]);
        let api = FakeApi::with_data(json!([]), json!({}), budgets).await;
        let client = ApiClient::new(&api.base_url);

        let budgets = client.budget_status().await.unwrap();

        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[0].status, BudgetHealth::OnTrack);
        assert_eq!(budgets[1].percentage_used, 120.0);
    }

    #[tokio::test]
    async fn server_error_maps_to_api_status() {
        let router = Router::new().route(
            "/reports/spending",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let api = FakeApi::serve(router).await;
        let client = ApiClient::new(&api.base_url);

        let result = client.spending_report().await;

        assert_eq!(
            result,
            Err(Error::ApiStatus(StatusCode::INTERNAL_SERVER_ERROR))
        );
    }

    #[tokio::test]
    async fn missing_endpoint_maps_to_not_found() {
        // A router with no routes answers 404 to everything.
        let api = FakeApi::serve(Router::new()).await;
        let client = ApiClient::new(&api.base_url);

        let result = client.budget_status().await;

        assert_eq!(result, Err(Error::NotFound));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_invalid_response() {
        let router = Router::new().route("/reports/spending", get(|| async { "not json" }));
        let api = FakeApi::serve(router).await;
        let client = ApiClient::new(&api.base_url);

        let result = client.spending_report().await;

        assert!(matches!(result, Err(Error::InvalidApiResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_api_maps_to_api_unreachable() {
        // Nothing is listening on port 9 on loopback.
        let client = ApiClient::new("http://127.0.0.1:9");

        let result = client.transactions(None).await;

        assert!(matches!(result, Err(Error::ApiUnreachable(_))));
    }
}
