//! The chat page and the endpoint that answers questions about spending.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    analytics::SpendingSummary,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, dashboard_page,
        loading_spinner,
    },
    query::responder::respond,
    stats::StatCards,
    transaction::TransactionStore,
};

/// The state needed for the chat page and query endpoint.
#[derive(Debug, Clone)]
pub struct QueryState {
    /// The store the answers are computed from.
    pub store: Arc<Mutex<TransactionStore>>,
    /// How long to wait before answering, simulates a round trip to a language model.
    pub query_delay: Duration,
}

impl FromRef<AppState> for QueryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            query_delay: state.query_delay,
        }
    }
}

impl QueryState {
    fn summary(&self) -> Result<SpendingSummary, Error> {
        let store = self
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        Ok(SpendingSummary::new(store.all()))
    }
}

/// The form data for asking a question.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    /// The question in plain English.
    #[serde(default)]
    pub question: String,
}

/// Display the page for asking questions about spending.
pub async fn get_chat_page(State(state): State<QueryState>) -> Result<Response, Error> {
    let summary = state.summary()?;

    Ok(chat_view(&summary).into_response())
}

/// Answer a question about spending as an HTML fragment.
///
/// The fragment holds the question followed by the answer and is appended to the
/// chat history on the page. Blank questions get an empty `204 No Content` response so the page is left as is.
pub async fn query_endpoint(
    State(state): State<QueryState>,
    Form(form): Form<QueryForm>,
) -> Response {
    let question = form.question.trim();

    if question.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    // The store lock must be released before the delay.
    let summary = match state.summary() {
        Ok(summary) => summary,
        Err(error) => return error.into_alert_response(),
    };

    tokio::time::sleep(state.query_delay).await;

    query_response_view(question, &respond(question, &summary)).into_response()
}

fn query_response_view(question: &str, answer: &str) -> Markup {
    html!(
        div
            data-query-question
            class="ml-auto max-w-[80%] bg-blue-600 text-white rounded-lg px-4 py-2"
        {
            (question)
        }

        div
            data-query-response
            class="border border-blue-200 bg-blue-50 dark:bg-blue-950 dark:border-blue-800 rounded-lg p-4"
        {
            div class="font-semibold text-blue-900 dark:text-blue-200 mb-1" { "AI Response:" }
            div class="text-blue-800 dark:text-blue-300" { (answer) }
        }
    )
}

fn chat_view(summary: &SpendingSummary) -> Markup {
    let content = html!(
        div
        {
            h3 class="text-lg font-semibold mb-4" { "Natural Language Queries" }
            p class="text-sm text-gray-600 dark:text-gray-400 mb-6"
            {
                "Ask questions about your spending in plain English"
            }

            form
                hx-post=(endpoints::QUERY_API)
                hx-target="#query-result"
                hx-swap="beforeend"
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="#question, #submit-button"
                class="space-y-4"
            {
                div
                {
                    label for="question" class=(FORM_LABEL_STYLE) { "Ask about your spending" }

                    textarea
                        name="question"
                        id="question"
                        rows="3"
                        required
                        placeholder="e.g., 'How much did I spend on food this month?' or 'What's my average transaction amount?'"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span class="inline htmx-indicator" id="indicator"
                    {
                        (loading_spinner())
                        "Processing..."
                    }
                    span class="idle-label" { "Ask AI" }
                }
            }

            div id="query-result" class="mt-4 flex flex-col gap-3" {}

            p class="mt-4 text-xs text-gray-500"
            {
                strong { "Try asking:" }
                " \"How much did I spend total?\", \"What's my food spending?\", \
                \"Show me my average transaction\""
            }
        }
    );

    dashboard_page(
        "AI Chat",
        endpoints::CHAT_VIEW,
        StatCards::new(summary),
        &[],
        &content,
    )
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        endpoints,
        query::chat_page::{QueryForm, QueryState, get_chat_page, query_endpoint},
        test_utils::{
            assert_hx_endpoint, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document, parse_html_fragment,
        },
        transaction::{Category, NewTransaction, PaymentMethod, TransactionStore},
    };

    fn get_state() -> QueryState {
        let mut store = TransactionStore::default();
        store
            .add(NewTransaction::new(
                "Starbucks",
                Category::Food,
                "12.5",
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

        QueryState {
            store: Arc::new(Mutex::new(store)),
            query_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn chat_page_has_question_form() {
        let response = get_chat_page(State(get_state())).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::QUERY_API, "hx-post");
        assert_eq!(form.value().attr("hx-target"), Some("#query-result"));
        assert_eq!(
            form.value().attr("hx-swap"),
            Some("beforeend"),
            "answers should be appended to the chat history"
        );
        assert!(
            html.select(&Selector::parse("#query-result").unwrap())
                .next()
                .is_some(),
            "chat history container missing"
        );
        assert!(
            form.select(&Selector::parse("textarea[name=question]").unwrap())
                .next()
                .is_some(),
            "question textarea missing"
        );
        let button_text = form
            .select(&Selector::parse("button").unwrap())
            .next()
            .expect("No button found")
            .text()
            .collect::<String>();
        assert!(button_text.contains("Ask AI"));
    }

    #[tokio::test]
    async fn answers_question_as_fragment() {
        let form = QueryForm {
            question: "What's my total spending?".to_owned(),
        };

        let response = query_endpoint(State(get_state()), Form(form)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html
            .select(&Selector::parse("[data-query-response]").unwrap())
            .next()
            .expect("No response found")
            .text()
            .collect::<String>();
        assert!(text.contains("AI Response:"));
        assert!(text.contains("Total spending: $52.50 across 2 transactions."));
    }

    #[tokio::test]
    async fn fragment_repeats_question_before_answer() {
        let form = QueryForm {
            question: "  What's my total spending?  ".to_owned(),
        };

        let response = query_endpoint(State(get_state()), Form(form)).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        let entries: Vec<_> = html
            .select(&Selector::parse("[data-query-question], [data-query-response]").unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].value().attr("data-query-question").is_some());
        assert_eq!(
            entries[0].text().collect::<String>(),
            "What's my total spending?"
        );
        assert!(entries[1].value().attr("data-query-response").is_some());
    }

    #[tokio::test]
    async fn blank_question_returns_no_content() {
        let form = QueryForm {
            question: "   \n".to_owned(),
        };

        let response = query_endpoint(State(get_state()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn waits_for_query_delay() {
        let state = QueryState {
            query_delay: Duration::from_millis(50),
            ..get_state()
        };
        let form = QueryForm {
            question: "average".to_owned(),
        };
        let start = std::time::Instant::now();

        let response = query_endpoint(State(state), Form(form)).await;

        assert_status_ok(&response);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
