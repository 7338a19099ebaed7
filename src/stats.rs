//! The summary cards shown above every tab.

use maud::{Markup, html};

use crate::{
    analytics::SpendingSummary,
    html::{CARD_STYLE, format_currency},
    insights::{anomalies, next_month_forecast, predictions},
};

/// The figures shown in the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCards {
    total: f64,
    count: usize,
    average: f64,
    forecast: Option<f64>,
    anomaly_count: usize,
}

impl StatCards {
    /// Collect the card figures from the current spending and the demonstration insights.
    pub fn new(summary: &SpendingSummary) -> Self {
        Self {
            total: summary.total,
            count: summary.count,
            average: summary.average(),
            forecast: next_month_forecast(&predictions()),
            anomaly_count: anomalies().len(),
        }
    }

    pub fn into_html(self) -> Markup {
        let forecast = self.forecast.map_or_else(|| "-".to_owned(), format_currency);
        let count_label = if self.count == 1 {
            "1 transaction".to_owned()
        } else {
            format!("{} transactions", self.count)
        };

        html!(
            section id="stats" class="grid grid-cols-1 md:grid-cols-4 gap-6"
            {
                (card("Total Spending", &format_currency(self.total), &count_label))
                (card("Average Transaction", &format_currency(self.average), "Per transaction"))
                (card("Predictions", &forecast, "Next month forecast"))
                (card("Anomalies", &self.anomaly_count.to_string(), "Detected this month"))
            }
        )
    }
}

fn card(title: &str, value: &str, caption: &str) -> Markup {
    html!(
        div class=(CARD_STYLE)
        {
            p class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p data-stat-value class="text-2xl font-bold text-emerald-600" { (value) }
            p class="text-xs text-gray-500" { (caption) }
        }
    )
}
