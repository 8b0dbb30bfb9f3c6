//! The recent-transactions panel on the dashboard.

use maud::{Markup, html};

use crate::{
    Error,
    api::{Transaction, TransactionType},
    html::{CARD_STYLE, arrow_down_left_icon, arrow_up_right_icon, format_currency, format_date},
};

/// The panel shows at most this many entries of whatever list it is given.
/// Truncation is a display concern here, not a query parameter.
const DISPLAY_LIMIT: usize = 5;

/// Renders the recent-transactions panel.
///
/// # Errors
/// Returns an error if a transaction date cannot be formatted for display.
pub(super) fn recent_transactions_panel(transactions: &[Transaction]) -> Result<Markup, Error> {
    let rows = transactions
        .iter()
        .take(DISPLAY_LIMIT)
        .map(transaction_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(html! {
        section class=(CARD_STYLE) data-panel="recent-transactions"
        {
            h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-4"
            {
                "Recent Transactions"
            }

            div class="space-y-4"
            {
                @if rows.is_empty() {
                    div class="text-center py-8"
                    {
                        p class="text-gray-500" { "No transactions yet" }
                        p class="text-sm text-gray-400 mt-1"
                        {
                            "Add your first transaction to get started"
                        }
                    }
                } @else {
                    @for row in &rows {
                        (row)
                    }
                }
            }
        }
    })
}

fn transaction_row(transaction: &Transaction) -> Result<Markup, Error> {
    let (icon, icon_style, amount_style, sign) = match transaction.transaction_type {
        TransactionType::Income => (
            arrow_up_right_icon("h-4 w-4"),
            "bg-green-100 text-green-600",
            "text-green-600",
            "+",
        ),
        TransactionType::Expense => (
            arrow_down_left_icon("h-4 w-4"),
            "bg-red-100 text-red-600",
            "text-red-600",
            "-",
        ),
    };
    let date = format_date(transaction.date)?;

    Ok(html! {
        div
            data-transaction-row="true"
            class="flex items-center justify-between p-3 bg-gray-50 dark:bg-gray-700/50 rounded-lg"
        {
            div class="flex items-center space-x-3"
            {
                div class={ "p-2 rounded-full " (icon_style) }
                {
                    (icon)
                }

                div
                {
                    p class="font-medium text-gray-900 dark:text-white" { (transaction.description) }
                    p class="text-sm text-gray-500" { (transaction.category) }
                }
            }

            div class="text-right"
            {
                p class={ "font-semibold " (amount_style) }
                {
                    (sign) (format_currency(transaction.amount))
                }
                p class="text-sm text-gray-500" { (date) }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::api::{Transaction, TransactionType};

    use super::recent_transactions_panel;

    fn transaction(id: i64, description: &str, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id,
            amount: 10.0 * id as f64,
            description: description.to_owned(),
            transaction_type,
            category: "General".to_owned(),
            date: date!(2026 - 07 - 28),
            user_id: 1,
        }
    }

    fn row_texts(markup: &str) -> Vec<String> {
        let html = Html::parse_fragment(markup);
        let row_selector = Selector::parse("[data-transaction-row='true']").unwrap();

        html.select(&row_selector)
            .map(|row| row.text().collect())
            .collect()
    }

    #[test]
    fn shows_at_most_five_rows_in_the_order_given() {
        let transactions: Vec<_> = (1..=7)
            .map(|id| transaction(id, &format!("Transaction {id}"), TransactionType::Expense))
            .collect();

        let markup = recent_transactions_panel(&transactions)
            .unwrap()
            .into_string();
        let rows = row_texts(&markup);

        assert_eq!(rows.len(), 5);
        for (index, row) in rows.iter().enumerate() {
            assert!(
                row.contains(&format!("Transaction {}", index + 1)),
                "Row {index} should be transaction {}, got: {row}",
                index + 1
            );
        }
    }

    #[test]
    fn shows_every_row_for_short_lists() {
        let transactions = vec![
            transaction(1, "Salary", TransactionType::Income),
            transaction(2, "Groceries", TransactionType::Expense),
        ];

        let markup = recent_transactions_panel(&transactions)
            .unwrap()
            .into_string();

        assert_eq!(row_texts(&markup).len(), 2);
    }

    #[test]
    fn income_and_expense_amounts_are_signed_and_colored() {
        let transactions = vec![
            transaction(1, "Salary", TransactionType::Income),
            transaction(2, "Groceries", TransactionType::Expense),
        ];

        let markup = recent_transactions_panel(&transactions)
            .unwrap()
            .into_string();

        assert!(markup.contains("+$10.00"));
        assert!(markup.contains("-$20.00"));
        assert!(markup.contains("text-green-600"));
        assert!(markup.contains("text-red-600"));
    }

    #[test]
    fn empty_list_renders_the_empty_state() {
        let markup = recent_transactions_panel(&[]).unwrap().into_string();

        assert!(markup.contains("No transactions yet"));
        assert!(row_texts(&markup).is_empty());
        // The empty state is a message, not a loading placeholder.
        assert!(!markup.contains("animate-pulse"));
    }
}
