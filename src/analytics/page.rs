//! The analytics page with the category charts, breakdown table and recent activity.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    analytics::{
        aggregation::{SpendingSummary, count_in_month},
        charts::{
            PageChart, chart_container, charts_script, spending_by_category_chart,
            transaction_count_chart,
        },
        tables::category_breakdown_table,
    },
    endpoints,
    html::{ECHARTS_SCRIPT, HeadElement, dashboard_page, format_currency},
    stats::StatCards,
    transaction::TransactionStore,
};

const SPENDING_CHART_ID: &str = "spending-by-category-chart";
const COUNT_CHART_ID: &str = "transaction-count-chart";

/// The state needed for the analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    /// The store the charts are computed from.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the spending and transaction counts per category.
pub async fn get_analytics_page(State(state): State<AnalyticsState>) -> Result<Response, Error> {
    let (summary, this_month) = {
        let store = state
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        (
            SpendingSummary::new(store.all()),
            count_in_month(store.all(), store.today()),
        )
    };

    Ok(analytics_view(summary, this_month).into_response())
}

fn analytics_view(summary: SpendingSummary, this_month: usize) -> Markup {
    let has_data = !summary.categories.is_empty();

    let charts = if has_data {
        vec![
            PageChart {
                id: SPENDING_CHART_ID,
                options: spending_by_category_chart(&summary.categories).to_string(),
            },
            PageChart {
                id: COUNT_CHART_ID,
                options: transaction_count_chart(&summary.categories).to_string(),
            },
        ]
    } else {
        Vec::new()
    };

    let content = html!(
        div class="space-y-6"
        {
            div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
            {
                div
                {
                    h3 class="text-lg font-semibold mb-4" { "Spending by Category" }

                    @if has_data {
                        (chart_container(SPENDING_CHART_ID))
                    } @else {
                        (empty_chart_message("Add transactions to see category breakdown"))
                    }
                }

                div
                {
                    h3 class="text-lg font-semibold mb-4" { "Transaction Count by Category" }

                    @if has_data {
                        (chart_container(COUNT_CHART_ID))
                    } @else {
                        (empty_chart_message("Add transactions to see transaction counts"))
                    }
                }
            }

            div class="grid grid-cols-1 lg:grid-cols-3 gap-6"
            {
                div class="lg:col-span-2"
                {
                    (category_breakdown_table(&summary.categories))
                }

                (recent_activity_panel(&summary, this_month))
            }
        }
    );

    let head_elements = if has_data {
        vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
            charts_script(&charts),
        ]
    } else {
        Vec::new()
    };

    dashboard_page(
        "Analytics",
        endpoints::ANALYTICS_VIEW,
        StatCards::new(&summary),
        &head_elements,
        &content,
    )
}

/// The number of transactions overall and this month, and the average amount.
fn recent_activity_panel(summary: &SpendingSummary, this_month: usize) -> Markup {
    html!(
        section
            id="recent-activity"
            class="bg-gray-50 dark:bg-gray-900 rounded-lg p-6 h-fit"
        {
            h3 class="text-lg font-semibold mb-4" { "Recent Activity" }

            dl class="space-y-2 text-sm"
            {
                (activity_row("Total transactions", &summary.count.to_string()))
                (activity_row("This month", &this_month.to_string()))
                (activity_row("Average per transaction", &format_currency(summary.average())))
            }
        }
    )
}

fn activity_row(label: &str, value: &str) -> Markup {
    html!(
        div class="flex justify-between gap-4"
        {
            dt class="text-gray-600 dark:text-gray-400" { (label) }
            dd data-activity-value class="font-semibold" { (value) }
        }
    )
}

fn empty_chart_message(message: &str) -> Markup {
    html!(
        div
            data-empty-chart
            class="h-[300px] flex items-center justify-center text-gray-500"
        {
            (message)
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        analytics::page::{AnalyticsState, get_analytics_page},
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document, select_texts},
        transaction::{Category, NewTransaction, PaymentMethod, TransactionStore},
    };

    fn get_state(store: TransactionStore) -> AnalyticsState {
        AnalyticsState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn shows_charts_and_table_with_data() {
        let mut store = TransactionStore::default();
        store
            .add(NewTransaction::new(
                "Starbucks",
                Category::Food,
                "12.50",
                PaymentMethod::CreditCard,
            ))
            .unwrap();
        store
            .add(NewTransaction::new(
                "Metro",
                Category::Transport,
                "40",
                PaymentMethod::Cash,
            ))
            .unwrap();

        let response = get_analytics_page(State(get_state(store))).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_element_exists(&html, "#spending-by-category-chart");
        assert_element_exists(&html, "#transaction-count-chart");
        assert_element_exists(&html, "#category-breakdown table");
        assert_eq!(count_elements(&html, "[data-empty-chart]"), 0);

        let script = html
            .select(&Selector::parse("head script:not([src])").unwrap())
            .map(|script| script.text().collect::<String>())
            .collect::<String>();
        assert!(script.contains("spending-by-category-chart"));
    }

    #[tokio::test]
    async fn shows_empty_messages_without_data() {
        let response = get_analytics_page(State(get_state(TransactionStore::default())))
            .await
            .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let messages: Vec<String> = html
            .select(&Selector::parse("[data-empty-chart]").unwrap())
            .map(|message| message.text().collect::<String>().trim().to_owned())
            .collect();
        assert_eq!(
            messages,
            [
                "Add transactions to see category breakdown",
                "Add transactions to see transaction counts"
            ]
        );
        assert_eq!(count_elements(&html, "table"), 0);
    }

    #[tokio::test]
    async fn recent_activity_counts_this_month() {
        let mut store = TransactionStore::default();
        store
            .add(NewTransaction::new(
                "Starbucks",
                Category::Food,
                "12.50",
                PaymentMethod::CreditCard,
            ))
            .unwrap();
        store
            .add(NewTransaction::new(
                "Metro",
                Category::Transport,
                "40",
                PaymentMethod::Cash,
            ))
            .unwrap();
        store
            .add(
                NewTransaction::new("Power Co", Category::Bills, "30", PaymentMethod::BankTransfer)
                    .date(date!(2020 - 01 - 15)),
            )
            .unwrap();

        let response = get_analytics_page(State(get_state(store))).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let heading = select_texts(&html, "#recent-activity h3");
        assert_eq!(heading, ["Recent Activity"]);
        assert_eq!(
            select_texts(&html, "#recent-activity [data-activity-value]"),
            ["3", "2", "$27.50"]
        );
    }

    #[tokio::test]
    async fn recent_activity_is_zero_without_data() {
        let response = get_analytics_page(State(get_state(TransactionStore::default())))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(
            select_texts(&html, "#recent-activity [data-activity-value]"),
            ["0", "0", "$0.00"]
        );
    }

    #[track_caller]
    fn assert_element_exists(html: &Html, selector: &str) {
        assert!(
            count_elements(html, selector) > 0,
            "no element matching '{selector}' found"
        );
    }

    fn count_elements(html: &Html, selector: &str) -> usize {
        html.select(&Selector::parse(selector).unwrap()).count()
    }
}
