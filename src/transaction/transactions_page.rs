//! Route handlers for the transactions page and its table fragment.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    api::ApiClient,
    boundary::RenderBoundary,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, loading_spinner, plus_icon},
    navigation::NavBar,
};

use super::view::transactions_table;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsState {
    /// The client for the finance API.
    pub api: ApiClient,
}

impl FromRef<AppState> for TransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Display the transactions page shell.
///
/// The shell renders instantly with a loading spinner; the browser swaps
/// in the table from [get_transactions_table] as soon as the page loads.
pub async fn get_transactions_page() -> Response {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="space-y-6 w-full"
            {
                header class="flex justify-between items-center"
                {
                    div
                    {
                        h1 class="text-2xl font-bold text-gray-900 dark:text-white" { "Transactions" }
                        p class="text-gray-600 dark:text-gray-400" { "Manage your income and expenses" }
                    }

                    // Creating transactions is not wired up yet: this app
                    // only issues reads and deletes against the API.
                    button class=(BUTTON_PRIMARY_STYLE) disabled title="Not available yet"
                    {
                        (plus_icon("h-4 w-4 mr-2"))
                        "Add Transaction"
                    }
                }

                (table_loading_view())
            }
        }
    };

    base("Transactions", &content).into_response()
}

/// The spinner shown until the table fragment arrives.
fn table_loading_view() -> Markup {
    html! {
        div
            hx-get=(endpoints::TRANSACTIONS_TABLE)
            hx-trigger="load"
            hx-swap="outerHTML"
            class="flex items-center justify-center h-64"
        {
            (loading_spinner("h-8 w-8 text-gray-200 dark:text-gray-600 fill-green-600"))
        }
    }
}

/// Render the transaction table fragment.
///
/// The full list is fetched in one request, no pagination. A fetch failure
/// is logged and rendered as the empty-loaded state.
pub async fn get_transactions_table(State(state): State<TransactionsState>) -> Response {
    let transactions = match state.api.transactions(None).await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Failed to load transactions: {error}");
            Vec::new()
        }
    };

    RenderBoundary::new(endpoints::TRANSACTIONS_TABLE).render(|| transactions_table(&transactions))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use scraper::Selector;
    use serde_json::json;

    use crate::{
        api::ApiClient,
        test_utils::{
            FakeApi, assert_valid_html, parse_html_document, parse_html_fragment, report_fixture,
            transaction_fixture,
        },
    };

    use super::{TransactionsState, get_transactions_page, get_transactions_table};

    #[tokio::test]
    async fn shell_renders_a_loading_spinner_wired_to_the_table_fragment() {
        let response = get_transactions_page().await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let fragment_selector = Selector::parse("div[hx-get='/transactions/table']").unwrap();
        let fragment = html
            .select(&fragment_selector)
            .next()
            .expect("no table fragment target");
        assert_eq!(fragment.value().attr("hx-trigger"), Some("load"));

        let spinner_selector = Selector::parse("svg[role='status']").unwrap();
        assert_eq!(html.select(&spinner_selector).count(), 1);
    }

    #[tokio::test]
    async fn table_fragment_renders_one_row_per_transaction() {
        let api = FakeApi::with_data(
            json!([
                transaction_fixture(1, 1200.0, "income", "Salary", "2026-07-01"),
                transaction_fixture(2, 80.5, "expense", "Groceries", "2026-07-03"),
                transaction_fixture(3, 25.0, "expense", "Petrol", "2026-07-05"),
            ]),
            report_fixture(1200.0, 105.5),
            json!([]),
        )
        .await;
        let state = TransactionsState {
            api: ApiClient::new(&api.base_url),
        };

        let response = get_transactions_table(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), 3);

        let text: String = html.root_element().text().collect();
        assert!(text.contains("Salary"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("Petrol"));
    }

    #[tokio::test]
    async fn fetch_failure_renders_the_empty_loaded_state() {
        let state = TransactionsState {
            api: ApiClient::new("http://127.0.0.1:9"),
        };

        let response = get_transactions_table(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_fragment(response).await;
        let text: String = html.root_element().text().collect();
        assert!(text.contains("No transactions found"));
    }
}
