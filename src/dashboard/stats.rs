//! The stats card grid at the top of the dashboard.

use maud::{Markup, html};

use crate::{
    api::SpendingReport,
    html::{
        CARD_STYLE, dollar_icon, format_currency, target_icon, trending_down_icon,
        trending_up_icon,
    },
};

// TODO: Wire this up to the goals endpoint once the finance API grows one.
const ACTIVE_GOALS_PLACEHOLDER: usize = 0;

/// One metric in the stats grid.
struct StatCard {
    name: &'static str,
    value: String,
    icon: Markup,
    color: &'static str,
    bg_color: &'static str,
}

/// Renders the four fixed metrics of the stats grid.
///
/// The net-income card flips between the positive (green) and negative
/// (red) palettes based on sign; zero counts as positive.
pub(super) fn stats_grid(report: &SpendingReport) -> Markup {
    let (net_color, net_bg) = if report.net_income >= 0.0 {
        ("text-green-600", "bg-green-50 dark:bg-green-900/20")
    } else {
        ("text-red-600", "bg-red-50 dark:bg-red-900/20")
    };

    let cards = [
        StatCard {
            name: "Total Income",
            value: format_currency(report.total_income),
            icon: trending_up_icon("h-6 w-6 text-green-600"),
            color: "text-green-600",
            bg_color: "bg-green-50 dark:bg-green-900/20",
        },
        StatCard {
            name: "Total Expenses",
            value: format_currency(report.total_expenses),
            icon: trending_down_icon("h-6 w-6 text-red-600"),
            color: "text-red-600",
            bg_color: "bg-red-50 dark:bg-red-900/20",
        },
        StatCard {
            name: "Net Income",
            value: format_currency(report.net_income),
            icon: dollar_icon(&format!("h-6 w-6 {net_color}")),
            color: net_color,
            bg_color: net_bg,
        },
        StatCard {
            name: "Active Goals",
            value: ACTIVE_GOALS_PLACEHOLDER.to_string(),
            icon: target_icon("h-6 w-6 text-blue-600"),
            color: "text-blue-600",
            bg_color: "bg-blue-50 dark:bg-blue-900/20",
        },
    ];

    html! {
        div
            data-stats-grid="true"
            class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6"
        {
            @for card in cards {
                (stat_card(card))
            }
        }
    }
}

fn stat_card(card: StatCard) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            div class="flex items-center"
            {
                div class={ "p-3 rounded-lg " (card.bg_color) }
                {
                    (card.icon)
                }

                div class="ml-4 flex-1 text-right"
                {
                    p class="text-sm font-medium text-gray-600 dark:text-gray-400" { (card.name) }
                    p class={ "text-2xl font-semibold " (card.color) } { (card.value) }
                }
            }
        }
    }
}
