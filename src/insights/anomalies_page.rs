//! The page listing the flagged transactions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error,
    analytics::SpendingSummary,
    endpoints,
    html::{BADGE_STYLE, dashboard_page, format_currency},
    insights::{
        data::{Anomaly, Severity, anomalies},
        predictions_page::InsightsState,
    },
    stats::StatCards,
};

/// Display the flagged transactions with their severity.
pub async fn get_anomalies_page(State(state): State<InsightsState>) -> Result<Response, Error> {
    let summary = state.summary()?;

    Ok(anomalies_view(&summary, &anomalies()).into_response())
}

fn severity_colour(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "bg-red-100 text-red-800",
        Severity::Medium => "bg-yellow-100 text-yellow-800",
        Severity::Low => "bg-blue-100 text-blue-800",
    }
}

fn anomalies_view(summary: &SpendingSummary, anomalies: &[Anomaly]) -> Markup {
    let content = html!(
        div
        {
            h3 class="text-lg font-semibold mb-4" { "Spending Anomalies" }
            p class="text-sm text-gray-600 dark:text-gray-400 mb-6"
            {
                "AI-detected unusual spending patterns and outliers"
            }

            ul id="anomalies" class="space-y-4"
            {
                @for anomaly in anomalies {
                    li
                        class="border border-gray-200 dark:border-gray-700 rounded-lg p-4
                            flex items-center justify-between"
                    {
                        div
                        {
                            div class="font-semibold" { (anomaly.merchant) }
                            div class="text-sm text-gray-600 dark:text-gray-400" { (anomaly.reason) }
                            div class="text-xs text-gray-500" { (anomaly.date) }
                        }

                        div class="flex items-center gap-2"
                        {
                            span
                                data-severity=(anomaly.severity)
                                class={(BADGE_STYLE) " " (severity_colour(anomaly.severity))}
                            {
                                (anomaly.severity)
                            }
                            span class="font-bold" { (format_currency(anomaly.amount)) }
                        }
                    }
                }
            }
        }
    );

    dashboard_page(
        "Anomalies",
        endpoints::ANOMALIES_VIEW,
        StatCards::new(summary),
        &[],
        &content,
    )
}
