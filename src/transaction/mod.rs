//! Transactions, the expenses the rest of the dashboard is built from.
//!
//! This module contains:
//! - The `Transaction` model and the `NewTransaction` form it is validated from
//! - The in-memory `TransactionStore`
//! - The transactions page and the endpoint for adding transactions

mod core;
mod create_endpoint;
mod form;
mod store;
mod transactions_page;

pub use core::{
    Category, InvalidField, MAX_AMOUNT, NewTransaction, PaymentMethod, Transaction, TransactionId,
};
pub use create_endpoint::create_transaction_endpoint;
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;
