//! Defines the core data models for transactions.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use time::Date;

// ============================================================================
// MODELS
// ============================================================================

/// The largest amount a single transaction may have.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// The unique identifier of a transaction.
///
/// IDs are derived from the creation time in milliseconds and are strictly
/// increasing within a [crate::TransactionStore].
pub type TransactionId = i64;

/// An expense, i.e. an event where money was spent.
///
/// Transactions are created through [crate::TransactionStore::add] and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Where the money was spent, e.g. "Starbucks".
    pub merchant: String,
    /// What kind of expense this was.
    pub category: Category,
    /// The amount of money spent in dollars, always greater than zero.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// How the transaction was paid for.
    pub payment_method: PaymentMethod,
}

/// The fixed set of spending categories.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Shopping,
    Transport,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Shopping,
        Category::Transport,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    /// The display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed set of ways a transaction can be paid for.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    Cash,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    /// Every payment method, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
    ];

    /// The display name of the payment method.
    pub fn name(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// CANDIDATES
// ============================================================================

/// The user's input for a new transaction, before validation.
///
/// This doubles as the form data for the create transaction endpoint, which
/// is why `amount` is kept as the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewTransaction {
    /// Where the money was spent. Must not be blank.
    pub merchant: String,
    /// What kind of expense this was.
    pub category: Category,
    /// The amount as typed, must parse to a positive number.
    pub amount: String,
    /// When the transaction happened, defaults to today.
    #[serde(default)]
    pub date: Option<Date>,
    /// How the transaction was paid for.
    pub payment_method: PaymentMethod,
}

impl NewTransaction {
    /// Create a new candidate with the date left unset.
    ///
    /// Shortcut for filling in the struct for discoverability.
    pub fn new(
        merchant: &str,
        category: Category,
        amount: &str,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            merchant: merchant.to_owned(),
            category,
            amount: amount.to_owned(),
            date: None,
            payment_method,
        }
    }

    /// Set the date of the transaction.
    pub fn date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    /// Check the candidate, returning the trimmed merchant name and the parsed amount.
    ///
    /// # Errors
    /// Returns every field that failed validation, in form order.
    pub(crate) fn validate(&self) -> Result<(String, f64), Vec<InvalidField>> {
        let merchant = self.merchant.trim();
        let amount = parse_amount(&self.amount);

        let mut invalid_fields = Vec::new();

        if merchant.is_empty() {
            invalid_fields.push(InvalidField::Merchant);
        }

        match amount {
            Some(amount) if invalid_fields.is_empty() => Ok((merchant.to_owned(), amount)),
            Some(_) => Err(invalid_fields),
            None => {
                invalid_fields.push(InvalidField::Amount);
                Err(invalid_fields)
            }
        }
    }
}

/// A field of [NewTransaction] that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    /// The merchant was empty or only whitespace.
    Merchant,
    /// The amount was not a number greater than zero and at most [MAX_AMOUNT].
    Amount,
}

impl Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidField::Merchant => f.write_str("merchant"),
            InvalidField::Amount => f.write_str("amount"),
        }
    }
}

fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| *amount > 0.0 && *amount <= MAX_AMOUNT)
}
