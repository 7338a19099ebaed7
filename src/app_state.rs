//! Implements a struct that holds the state of the REST server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::{Error, timezone::get_local_offset, transaction::TransactionStore};

/// How long the query endpoint waits before answering by default.
pub const DEFAULT_QUERY_DELAY: Duration = Duration::from_millis(1500);

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions shared by every page.
    pub store: Arc<Mutex<TransactionStore>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// How long the query endpoint waits before answering.
    pub query_delay: Duration,
}

impl AppState {
    /// Create a new [AppState] with an empty transaction store.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(local_timezone: &str, query_delay: Duration) -> Result<Self, Error> {
        let local_offset = get_local_offset(local_timezone)
            .ok_or_else(|| Error::InvalidTimezoneError(local_timezone.to_owned()))?;

        Ok(Self {
            store: Arc::new(Mutex::new(TransactionStore::new(local_offset))),
            local_timezone: local_timezone.to_owned(),
            query_delay,
        })
    }
}
