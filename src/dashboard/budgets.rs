//! The budget-overview panel on the dashboard.

use maud::{Markup, html};

use crate::{
    api::{BudgetHealth, BudgetStatus},
    html::{CARD_STYLE, format_currency},
};

/// The color classes for a budget's status badge, a pure function of the
/// status enum.
fn health_badge_class(status: BudgetHealth) -> &'static str {
    match status {
        BudgetHealth::OnTrack => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        BudgetHealth::OverBudget => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
        BudgetHealth::UnderBudget => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300",
    }
}

/// The progress-bar color over `percentage_used`: green up to and including
/// 80, yellow up to and including 100, red beyond that.
fn bar_color_class(percentage_used: f64) -> &'static str {
    if percentage_used > 100.0 {
        "bg-red-500"
    } else if percentage_used > 80.0 {
        "bg-yellow-500"
    } else {
        "bg-green-500"
    }
}

/// The filled fraction of the progress bar. Overflow past 100% is clamped
/// visually; the numeric label still shows the true percentage.
fn bar_width_percentage(percentage_used: f64) -> f64 {
    percentage_used.min(100.0)
}

/// Renders the budget-overview panel.
pub(super) fn budget_overview_panel(budgets: &[BudgetStatus]) -> Markup {
    html! {
        section class=(CARD_STYLE) data-panel="budget-overview"
        {
            h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4"
            {
                "Budget Overview"
            }

            div class="space-y-4"
            {
                @if budgets.is_empty() {
                    div class="text-center py-8"
                    {
                        p class="text-gray-500" { "No budgets set" }
                        p class="text-sm text-gray-400 mt-1"
                        {
                            "Create your first budget to track spending"
                        }
                    }
                } @else {
                    @for budget in budgets {
                        (budget_row(budget))
                    }
                }
            }
        }
    }
}

fn budget_row(budget: &BudgetStatus) -> Markup {
    let width = bar_width_percentage(budget.percentage_used);

    html! {
        div class="space-y-2" data-budget-row="true"
        {
            div class="flex items-center justify-between"
            {
                h4 class="font-medium text-gray-900 dark:text-white" { (budget.budget_name) }

                span class={ "px-2 py-1 rounded-full text-xs font-medium " (health_badge_class(budget.status)) }
                {
                    (budget.status.label())
                }
            }

            div class="space-y-1"
            {
                div class="flex justify-between text-sm text-gray-600 dark:text-gray-400"
                {
                    span { "Spent: " (format_currency(budget.spent_amount)) }
                    span { "Budget: " (format_currency(budget.budget_amount)) }
                }

                div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2"
                {
                    div
                        class={ "h-2 rounded-full " (bar_color_class(budget.percentage_used)) }
                        style=(format!("width: {width}%"))
                    {}
                }

                div class="flex justify-between text-xs text-gray-500"
                {
                    span { (format!("{:.1}", budget.percentage_used)) "% used" }
                    span { "Remaining: " (format_currency(budget.remaining_amount)) }
                }
            }
        }
    }
}
