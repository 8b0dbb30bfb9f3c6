//! Dashboard HTTP handlers and view composition.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{ApiClient, BudgetStatus, SpendingReport, Transaction},
    boundary::{RenderBoundary, compact_fallback},
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, card_skeleton, skeleton},
    navigation::NavBar,
};

use super::{budgets::budget_overview_panel, recent::recent_transactions_panel, stats::stats_grid};

/// How many transactions the dashboard requests for its recent list.
const RECENT_TRANSACTIONS_LIMIT: u32 = 10;

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the finance API.
    pub api: ApiClient,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Everything the dashboard content fragment renders.
///
/// The default value is the empty/loaded state shown when the combined
/// fetch fails: no stats grid, an empty recent-transactions panel and an
/// empty budget panel.
#[derive(Default)]
struct DashboardData {
    report: Option<SpendingReport>,
    transactions: Vec<Transaction>,
    budgets: Vec<BudgetStatus>,
}

/// Display the dashboard page shell.
///
/// The shell renders instantly with skeleton placeholders matching the
/// eventual layout; the browser swaps in the real content from
/// [get_dashboard_content] as soon as the page loads.
pub async fn get_dashboard_page() -> Response {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            (dashboard_skeleton())
        }
    };

    base("Dashboard", &content).into_response()
}

/// Render the dashboard content fragment.
pub async fn get_dashboard_content(State(state): State<DashboardState>) -> Response {
    let data = match load_dashboard_data(&state.api).await {
        Ok(data) => data,
        // The three requests are joined, so a failure in any of them leaves
        // every panel empty. No partial dashboards.
        Err(error) => {
            tracing::error!("Failed to load dashboard data: {error}");
            DashboardData::default()
        }
    };

    RenderBoundary::new(endpoints::DASHBOARD_CONTENT)
        .render_with_fallback(|| dashboard_content_view(&data), compact_fallback)
}

/// Issue the three API requests concurrently and wait for all of them.
async fn load_dashboard_data(api: &ApiClient) -> Result<DashboardData, Error> {
    let (transactions, report, budgets) = tokio::try_join!(
        api.transactions(Some(RECENT_TRANSACTIONS_LIMIT)),
        api.spending_report(),
        api.budget_status(),
    )?;

    Ok(DashboardData {
        report: Some(report),
        transactions,
        budgets,
    })
}

/// The placeholder layout shown while the content fragment is outstanding:
/// one header skeleton, four stat-card skeletons and two panel skeletons.
fn dashboard_skeleton() -> Markup {
    html! {
        div
            id="dashboard-content"
            hx-get=(endpoints::DASHBOARD_CONTENT)
            hx-trigger="load"
            hx-swap="outerHTML"
            class="space-y-6 w-full"
        {
            div
            {
                div class="mb-2" { (skeleton("h-8 w-48")) }
                (skeleton("h-4 w-64"))
            }

            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6"
            {
                @for _ in 0..4 {
                    (card_skeleton())
                }
            }

            div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
            {
                (card_skeleton())
                (card_skeleton())
            }
        }
    }
}

fn dashboard_content_view(data: &DashboardData) -> Result<Markup, Error> {
    let recent = recent_transactions_panel(&data.transactions)?;

    Ok(html! {
        div id="dashboard-content" class="space-y-6 w-full"
        {
            div
            {
                h1 class="text-2xl font-bold text-gray-900 dark:text-white" { "Dashboard" }
                p class="text-gray-600 dark:text-gray-400" { "Overview of your financial activity" }
            }

            @if let Some(ref report) = data.report {
                (stats_grid(report))
            }

            div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
            {
                (recent)
                (budget_overview_panel(&data.budgets))
            }
        }
    })
}
