//! The in-memory transaction store.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::{
    Error,
    transaction::core::{NewTransaction, Transaction, TransactionId},
};

/// An ordered collection of transactions, most recent first.
///
/// The only way to change the store is to [add](TransactionStore::add) a
/// transaction. Transactions cannot be edited or removed, and the store is
/// discarded along with the process that owns it.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    last_id: Option<TransactionId>,
    local_offset: UtcOffset,
}

impl TransactionStore {
    /// Create an empty store.
    ///
    /// `local_offset` decides what "today" is for transactions created without a date.
    pub fn new(local_offset: UtcOffset) -> Self {
        Self {
            transactions: Vec::new(),
            last_id: None,
            local_offset,
        }
    }

    /// Validate `candidate` and insert it at the front of the store.
    ///
    /// The new transaction gets a fresh ID and, if it has no date, today's date.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransaction] if the merchant is blank or the
    /// amount is not a positive number. The store is left unchanged.
    pub fn add(&mut self, candidate: NewTransaction) -> Result<&Transaction, Error> {
        let (merchant, amount) = candidate.validate().map_err(|invalid_fields| {
            tracing::warn!("rejected transaction with invalid fields {invalid_fields:?}");
            Error::InvalidTransaction(invalid_fields)
        })?;

        let transaction = Transaction {
            id: self.next_id(),
            merchant,
            category: candidate.category,
            amount,
            date: candidate.date.unwrap_or_else(|| self.today()),
            payment_method: candidate.payment_method,
        };

        tracing::debug!("adding transaction {transaction:?}");
        self.last_id = Some(transaction.id);
        self.transactions.insert(0, transaction);

        Ok(&self.transactions[0])
    }

    /// All transactions, most recent first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Today's date in the store's timezone.
    pub fn today(&self) -> Date {
        OffsetDateTime::now_utc().to_offset(self.local_offset).date()
    }

    fn next_id(&self) -> TransactionId {
        let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as TransactionId;

        match self.last_id {
            Some(last_id) if now <= last_id => last_id + 1,
            _ => now,
        }
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}
