//! Derived views over the transaction list.
//!
//! Every function here is pure and recomputes its result from the slice it is
//! given, so results always agree with the current contents of the store.

use time::Date;

use crate::transaction::{Category, Transaction};

/// The total spend and number of transactions for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAggregate {
    /// The category being summarised.
    pub category: Category,
    /// The sum of the amounts of the transactions in the category.
    pub total_amount: f64,
    /// The number of transactions in the category.
    pub count: usize,
}

/// A snapshot of the aggregates over a set of transactions.
///
/// This is what the query responder answers questions from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// The sum of all transaction amounts.
    pub total: f64,
    /// The number of transactions.
    pub count: usize,
    /// The per-category breakdown, see [by_category].
    pub categories: Vec<CategoryAggregate>,
}

impl SpendingSummary {
    /// Compute the total, count and per-category breakdown of `transactions`.
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            total: total(transactions),
            count: transactions.len(),
            categories: by_category(transactions),
        }
    }

    /// The average transaction amount, or zero if there are no transactions.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }

    /// The aggregate for `category`.
    ///
    /// Categories without any spend are reported as zero.
    pub fn category(&self, category: Category) -> CategoryAggregate {
        self.categories
            .iter()
            .find(|aggregate| aggregate.category == category)
            .copied()
            .unwrap_or(CategoryAggregate {
                category,
                total_amount: 0.0,
                count: 0,
            })
    }
}

/// The sum of the amounts of `transactions`, zero if there are none.
pub fn total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum()
}

/// The mean transaction amount, exactly zero if there are no transactions.
pub fn average(transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }

    total(transactions) / transactions.len() as f64
}

/// The number of `transactions` dated in the same calendar month and year as `today`.
pub fn count_in_month(transactions: &[Transaction], today: Date) -> usize {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.date.year() == today.year() && transaction.date.month() == today.month()
        })
        .count()
}

/// Transactions whose merchant, category or payment method contain `query`,
/// ignoring case.
///
/// The fields are joined with spaces before matching, and an empty query
/// matches everything. The input order is preserved.
pub fn filter<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    let query = query.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| {
            format!(
                "{} {} {}",
                transaction.merchant, transaction.category, transaction.payment_method
            )
            .to_lowercase()
            .contains(&query)
        })
        .collect()
}

/// The total and count for each category, in [Category::ALL] order.
///
/// Categories with a total of zero are left out.
pub fn by_category(transactions: &[Transaction]) -> Vec<CategoryAggregate> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let (total_amount, count) = transactions
                .iter()
                .filter(|transaction| transaction.category == category)
                .fold((0.0, 0), |(sum, count), transaction| {
                    (sum + transaction.amount, count + 1)
                });

            CategoryAggregate {
                category,
                total_amount,
                count,
            }
        })
        .filter(|aggregate| aggregate.total_amount != 0.0)
        .collect()
}
