//! Spendboard is a single-page dashboard for recording and understanding spending.
//!
//! Transactions are kept in memory for the life of the server. The library
//! provides the engine, i.e. the [TransactionStore], the [SpendingSummary]
//! aggregations and the keyword [respond]er, plus a REST API that directly
//! serves HTML pages built on top of it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod analytics;
mod app_state;
mod banner;
mod endpoints;
mod error;
mod html;
mod insights;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod query;
mod routing;
mod stats;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use analytics::{CategoryAggregate, SpendingSummary, average, by_category, filter, total};
pub use app_state::{AppState, DEFAULT_QUERY_DELAY};
pub use error::Error;
pub use html::format_currency;
pub use insights::{Anomaly, Prediction, Severity, anomalies, next_month_forecast, predictions};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use query::respond;
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{
    Category, InvalidField, NewTransaction, PaymentMethod, Transaction, TransactionId,
    TransactionStore,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
