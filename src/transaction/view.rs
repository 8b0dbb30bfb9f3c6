//! HTML rendering for the transaction table.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error,
    api::{Transaction, TransactionType},
    endpoints,
    html::{
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, arrow_down_left_icon,
        arrow_up_right_icon, format_currency, format_date, pencil_icon, trash_icon,
    },
};

/// The max number of graphemes to display in the transaction table rows
/// before truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 48;

/// Renders the transaction table, or the empty-state call-to-action when
/// there is nothing to show.
///
/// # Errors
/// Returns an error if a transaction date cannot be formatted for display.
pub(super) fn transactions_table(transactions: &[Transaction]) -> Result<Markup, Error> {
    if transactions.is_empty() {
        return Ok(empty_state_view());
    }

    let rows = transactions
        .iter()
        .map(transaction_row_view)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(html! {
        div
            id="transaction-table"
            class="w-full bg-white dark:bg-gray-800 rounded-lg shadow-sm border
                border-gray-200 dark:border-gray-700 overflow-x-auto"
        {
            table class="min-w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class="px-6 py-3" { "Description" }
                        th scope="col" class="px-6 py-3" { "Category" }
                        th scope="col" class="px-6 py-3" { "Type" }
                        th scope="col" class="px-6 py-3" { "Amount" }
                        th scope="col" class="px-6 py-3" { "Date" }
                        th scope="col" class="px-6 py-3" { "Actions" }
                    }
                }

                tbody
                {
                    @for row in &rows {
                        (row)
                    }
                }
            }
        }
    })
}

fn empty_state_view() -> Markup {
    html! {
        div
            id="transaction-table"
            class="w-full bg-white dark:bg-gray-800 rounded-lg shadow-sm border
                border-gray-200 dark:border-gray-700"
        {
            div class="text-center py-12"
            {
                p class="text-gray-500 text-lg" { "No transactions found" }
                p class="text-gray-400 mt-2" { "Add your first transaction to get started" }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Result<Markup, Error> {
    let (icon, icon_style, badge_style, amount_style, sign) = match transaction.transaction_type {
        TransactionType::Income => (
            arrow_up_right_icon("h-4 w-4"),
            "bg-green-100 text-green-600",
            "bg-green-100 text-green-800",
            "text-green-600",
            "+",
        ),
        TransactionType::Expense => (
            arrow_down_left_icon("h-4 w-4"),
            "bg-red-100 text-red-600",
            "bg-red-100 text-red-800",
            "text-red-600",
            "-",
        ),
    };
    let (description, tooltip) = truncate_description(&transaction.description);
    let date = format_date(transaction.date)?;

    Ok(html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex items-center"
                {
                    div class={ "p-2 rounded-full mr-3 " (icon_style) }
                    {
                        (icon)
                    }

                    div
                        class="text-sm font-medium text-gray-900 dark:text-white"
                        title=[tooltip]
                    {
                        (description)
                    }
                }
            }

            td class=(TABLE_CELL_STYLE) { (transaction.category) }

            td class=(TABLE_CELL_STYLE)
            {
                span class={ "inline-flex px-2 py-1 text-xs font-semibold rounded-full " (badge_style) }
                {
                    (transaction.transaction_type.label())
                }
            }

            td class={ "px-6 py-4 text-sm font-medium " (amount_style) }
            {
                (sign) (format_currency(transaction.amount))
            }

            td class=(TABLE_CELL_STYLE) { (date) }

            td class=(TABLE_CELL_STYLE)
            {
                (action_buttons(transaction))
            }
        }
    })
}

fn action_buttons(transaction: &Transaction) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);

    html! {
        div class="flex space-x-2"
        {
            // Editing is not wired up yet.
            button
                class="text-indigo-600 hover:text-indigo-900 disabled:text-gray-400"
                disabled
                title="Not available yet"
                aria-label="Edit transaction"
            {
                (pencil_icon("h-4 w-4"))
            }

            button
                hx-delete=(delete_url)
                hx-confirm="Are you sure you want to delete this transaction?"
                hx-target="closest tr"
                hx-swap="delete"
                hx-disabled-elt="this"
                class="text-red-600 hover:text-red-900"
                aria-label="Delete transaction"
            {
                (trash_icon("h-4 w-4"))
            }
        }
    }
}

fn truncate_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();

        (truncated + "...", Some(description))
    }
}
