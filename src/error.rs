//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError,
    transaction::InvalidField,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user's input for a new transaction failed validation.
    ///
    /// Holds every field that was invalid. The transaction store is never
    /// changed when this error is returned.
    #[error("invalid transaction, check the fields: {}", join_fields(.0))]
    InvalidTransaction(Vec<InvalidField>),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the transaction store lock
    #[error("could not acquire the transaction store lock")]
    StoreLockError,
}

fn join_fields(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTransaction(fields) => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid transaction", &invalid_transaction_details(&fields)),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

fn invalid_transaction_details(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(|field| match field {
            InvalidField::Merchant => "Enter the merchant name.",
            InvalidField::Amount => {
                "Enter an amount greater than zero and no more than $1,000,000,000.00."
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
