//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use time::OffsetDateTime;

use crate::{
    AppState, Error, endpoints,
    timezone::get_local_offset,
    transaction::{NewTransaction, TransactionStore},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store the new transaction is added to.
    pub store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for creating a new transaction, redirects to transactions view on success.
///
/// A missing date is filled in with today's date in the local timezone.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(mut form): Form<NewTransaction>,
) -> Response {
    if form.date.is_none() {
        let Some(local_timezone) = get_local_offset(&state.local_timezone) else {
            tracing::error!("Invalid timezone {}", state.local_timezone);
            return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
        };

        form.date = Some(OffsetDateTime::now_utc().to_offset(local_timezone).date());
    }

    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if let Err(error) = store.add(form) {
        tracing::error!("could not create transaction: {error}");

        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
