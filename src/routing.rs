//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    analytics::get_analytics_page,
    banner::{banner_method_not_allowed, get_banner},
    endpoints,
    insights::{get_anomalies_page, get_predictions_page},
    not_found::get_404_not_found,
    query::{get_chat_page, query_endpoint},
    transaction::{create_transaction_endpoint, get_transactions_page},
};

/// Return a router with all the app's routes.
///
/// Files in `static_dir` are served under [endpoints::STATIC].
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page))
        .route(endpoints::PREDICTIONS_VIEW, get(get_predictions_page))
        .route(endpoints::ANOMALIES_VIEW, get(get_anomalies_page))
        .route(endpoints::CHAT_VIEW, get(get_chat_page));

    let api = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(endpoints::QUERY_API, post(query_endpoint))
        .route(
            endpoints::BANNER_API,
            get(get_banner).fallback(banner_method_not_allowed),
        );

    pages
        .merge(api)
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}
