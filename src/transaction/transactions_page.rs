//! Defines the route handler for the page that adds, searches and lists transactions.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;
use time::{Date, OffsetDateTime};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState, Error,
    analytics::{SpendingSummary, filter},
    endpoints,
    html::{BADGE_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement, dashboard_page, format_currency},
    stats::StatCards,
    timezone::get_local_offset,
    transaction::{Category, Transaction, TransactionStore, form::new_transaction_form},
};

/// The max number of graphemes to display for a merchant before truncating
/// and displaying ellipses.
const MAX_MERCHANT_GRAPHEMES: usize = 32;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The store to list transactions from.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query parameters for the transactions page.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionsQuery {
    /// Only show transactions whose merchant, category or payment method contain this text.
    pub search: Option<String>,
}

/// Render the transactions page, optionally filtered by `search`.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Response, Error> {
    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;
    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();

    let search = query.search.unwrap_or_default();

    let (summary, transactions) = {
        let store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        let transactions: Vec<Transaction> = filter(store.all(), &search)
            .into_iter()
            .cloned()
            .collect();

        (SpendingSummary::new(store.all()), transactions)
    };

    Ok(transactions_view(&summary, &transactions, &search, today).into_response())
}

fn transactions_view(
    summary: &SpendingSummary,
    transactions: &[Transaction],
    search: &str,
    today: Date,
) -> Markup {
    let content = html!(
        div class="space-y-6"
        {
            p
                id="banner"
                class="empty:hidden text-center text-sm text-emerald-700 dark:text-emerald-400"
            {}

            (new_transaction_form(today))

            input
                type="search"
                name="search"
                value=(search)
                placeholder="Search transactions..."
                aria-label="Search transactions"
                hx-get=(endpoints::TRANSACTIONS_VIEW)
                hx-trigger="input changed delay:300ms, search"
                hx-target="#transaction-list"
                hx-select="#transaction-list"
                hx-swap="outerHTML"
                hx-push-url="true"
                class=(FORM_TEXT_INPUT_STYLE);

            (transaction_list(transactions))
        }
    );

    dashboard_page(
        "Transactions",
        endpoints::TRANSACTIONS_VIEW,
        StatCards::new(summary),
        &[banner_script()],
        &content,
    )
}

fn transaction_list(transactions: &[Transaction]) -> Markup {
    html!(
        section id="transaction-list"
        {
            h3 class="text-lg font-semibold mb-4" { "Recent Transactions" }

            @if transactions.is_empty() {
                div class="text-center py-8 text-gray-500"
                {
                    p { "No transactions yet. Add your first transaction above." }
                }
            } @else {
                ul class="space-y-3"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    )
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let (merchant, full_merchant) = format_merchant(&transaction.merchant);

    html!(
        li
            data-transaction-id=(transaction.id)
            class="flex flex-wrap items-center justify-between gap-4 p-4 border
                border-gray-200 dark:border-gray-700 rounded-lg
                hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors"
        {
            div class="flex flex-col"
            {
                span class="font-semibold" title=[full_merchant] { (merchant) }
                span class="text-sm text-gray-500" { (transaction.date) }
            }

            div class="flex items-center gap-4"
            {
                span class={(BADGE_STYLE) " " (category_colour(transaction.category))}
                {
                    (transaction.category)
                }
                span class="text-sm text-gray-500" { (transaction.payment_method) }
                span class="font-bold text-lg" { (format_currency(transaction.amount)) }
            }
        }
    )
}

fn category_colour(category: Category) -> &'static str {
    match category {
        Category::Food => "bg-emerald-100 text-emerald-800",
        Category::Shopping => "bg-blue-100 text-blue-800",
        Category::Transport => "bg-purple-100 text-purple-800",
        Category::Bills => "bg-red-100 text-red-800",
        Category::Entertainment => "bg-yellow-100 text-yellow-800",
        Category::Other => "bg-gray-100 text-gray-800",
    }
}

fn format_merchant(merchant: &str) -> (String, Option<&str>) {
    let merchant_length = merchant.graphemes(true).count();

    if merchant_length <= MAX_MERCHANT_GRAPHEMES {
        (merchant.to_owned(), None)
    } else {
        let truncated: String = merchant
            .graphemes(true)
            .take(MAX_MERCHANT_GRAPHEMES - 3)
            .collect();
        let truncated = truncated + "...";
        (truncated, Some(merchant))
    }
}

/// Fetches the greeting for the banner once the page has loaded.
///
/// A failed request leaves the banner empty.
fn banner_script() -> HeadElement {
    HeadElement::ScriptSource(PreEscaped(format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            fetch("{}")
                .then((response) => response.json())
                .then((data) => {{
                    document.getElementById("banner").textContent = data.message ?? "";
                }})
                .catch(() => {{}});
        }});"#,
        endpoints::BANNER_API
    )))
}
