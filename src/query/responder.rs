//! Keyword based answers to questions about spending.
//!
//! This is a deterministic stand-in for a natural language interface. It does
//! not understand the question, it looks for a handful of keywords and fills
//! in one of four canned sentences.

use crate::{analytics::SpendingSummary, html::format_currency, transaction::Category};

/// What a question is asking about, decided by the first matching keyword rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Total,
    Food,
    Average,
    Unknown,
}

impl Topic {
    fn of(question: &str) -> Self {
        let question = question.to_lowercase();

        if question.contains("total") || question.contains("spent") {
            Topic::Total
        } else if question.contains("food") || question.contains("restaurant") {
            Topic::Food
        } else if question.contains("average") {
            Topic::Average
        } else {
            Topic::Unknown
        }
    }
}

/// Answer `question` using the figures in `summary`.
///
/// Keywords are matched case-insensitively, in this order:
/// 1. "total" or "spent": the total spend and number of transactions
/// 2. "food" or "restaurant": the Food category's total and count
/// 3. "average": the average transaction amount
///
/// Anything else gets a summary of the count and total with a hint to ask
/// something more specific.
pub fn respond(question: &str, summary: &SpendingSummary) -> String {
    let topic = Topic::of(question);
    tracing::debug!("answering question {question:?} as {topic:?}");

    match topic {
        Topic::Total => format!(
            "Total spending: {} across {} transactions.",
            format_currency(summary.total),
            summary.count
        ),
        Topic::Food => {
            let food = summary.category(Category::Food);

            format!(
                "Food spending: {} from {} transactions.",
                format_currency(food.total_amount),
                food.count
            )
        }
        Topic::Average => format!(
            "Average transaction amount: {}",
            format_currency(summary.average())
        ),
        Topic::Unknown => format!(
            "I found {} transactions totaling {}. Try asking about specific categories, totals, or averages.",
            summary.count,
            format_currency(summary.total)
        ),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        analytics::SpendingSummary,
        query::responder::{Topic, respond},
        transaction::{Category, PaymentMethod, Transaction},
    };

    fn summary_of(records: &[(Category, f64)]) -> SpendingSummary {
        let transactions: Vec<Transaction> = records
            .iter()
            .enumerate()
            .map(|(id, &(category, amount))| Transaction {
                id: id as i64,
                merchant: format!("Merchant {id}"),
                category,
                amount,
                date: date!(2024 - 01 - 15),
                payment_method: PaymentMethod::Cash,
            })
            .collect();

        SpendingSummary::new(&transactions)
    }

    fn food_and_transport() -> SpendingSummary {
        summary_of(&[(Category::Food, 12.5), (Category::Transport, 40.0)])
    }

    #[test]
    fn total_question_reports_total_and_count() {
        let answer = respond("What's my total spending?", &food_and_transport());

        assert_eq!(answer, "Total spending: $52.50 across 2 transactions.");
    }

    #[test]
    fn food_question_reports_food_category() {
        let answer = respond("food costs", &food_and_transport());

        assert_eq!(answer, "Food spending: $12.50 from 1 transactions.");
    }

    #[test]
    fn food_question_without_food_reports_zero() {
        let answer = respond("restaurant bills?", &summary_of(&[(Category::Bills, 80.0)]));

        assert_eq!(answer, "Food spending: $0.00 from 0 transactions.");
    }

    #[test]
    fn average_question_reports_average() {
        let answer = respond("average please", &food_and_transport());

        assert_eq!(answer, "Average transaction amount: $26.25");
    }

    #[test]
    fn average_of_empty_store_is_zero() {
        let answer = respond("average", &summary_of(&[]));

        assert_eq!(answer, "Average transaction amount: $0.00");
    }

    #[test]
    fn unknown_question_falls_back_to_summary() {
        let answer = respond("random gibberish", &food_and_transport());

        assert!(answer.contains('2'), "{answer}");
        assert!(answer.contains("$52.50"), "{answer}");
        assert!(answer.starts_with("I found 2 transactions totaling $52.50."));
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(Topic::of("HOW MUCH HAVE I SPENT"), Topic::Total);
        assert_eq!(Topic::of("Restaurant"), Topic::Food);
        assert_eq!(Topic::of("AVERAGE"), Topic::Average);
    }

    #[test]
    fn earlier_rules_win() {
        assert_eq!(Topic::of("total food spending"), Topic::Total);
        assert_eq!(Topic::of("average food bill"), Topic::Food);
        assert_eq!(Topic::of("average amount spent"), Topic::Total);
        assert_eq!(Topic::of("how much on rent?"), Topic::Unknown);
    }
}
