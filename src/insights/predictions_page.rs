//! The forecast page: predicted against actual monthly spend.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    datatype::DataPoint,
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    analytics::{PageChart, SpendingSummary, chart_container, charts_script, currency_formatter},
    endpoints,
    html::{
        ECHARTS_SCRIPT, HeadElement, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        dashboard_page, format_currency,
    },
    insights::data::{Prediction, predictions},
    stats::StatCards,
    transaction::TransactionStore,
};

const PREDICTIONS_CHART_ID: &str = "predictions-chart";

/// The state needed for the insight pages.
#[derive(Debug, Clone)]
pub struct InsightsState {
    /// The store the summary cards are computed from.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for InsightsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

impl InsightsState {
    pub(super) fn summary(&self) -> Result<SpendingSummary, Error> {
        let store = self
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        Ok(SpendingSummary::new(store.all()))
    }
}

/// Display the spending forecast.
pub async fn get_predictions_page(State(state): State<InsightsState>) -> Result<Response, Error> {
    let summary = state.summary()?;

    Ok(predictions_view(&summary, &predictions()).into_response())
}

fn predictions_view(summary: &SpendingSummary, predictions: &[Prediction]) -> Markup {
    let chart = PageChart {
        id: PREDICTIONS_CHART_ID,
        options: predictions_chart(predictions).to_string(),
    };

    let content = html!(
        div
        {
            h3 class="text-lg font-semibold mb-4" { "ML Spending Predictions" }
            p class="text-sm text-gray-600 dark:text-gray-400 mb-6"
            {
                "Machine learning forecasts based on historical spending patterns"
            }

            div class="h-[400px]" { (chart_container(PREDICTIONS_CHART_ID)) }

            (variance_table(predictions))
        }
    );

    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        charts_script(&[chart]),
    ];

    dashboard_page(
        "ML Predictions",
        endpoints::PREDICTIONS_VIEW,
        StatCards::new(summary),
        &head_elements,
        &content,
    )
}

/// Line chart with a solid actual series and a dashed predicted series.
///
/// Months without actual spend are left as gaps.
fn predictions_chart(predictions: &[Prediction]) -> Chart {
    let labels: Vec<&str> = predictions.iter().map(|p| p.month).collect();
    let actual: Vec<DataPoint> = predictions
        .iter()
        .map(|p| match p.actual {
            Some(amount) => DataPoint::from(amount),
            None => DataPoint::from("-"),
        })
        .collect();
    let predicted: Vec<f64> = predictions.iter().map(|p| p.predicted).collect();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter("${value}")),
        )
        .series(
            Line::new()
                .name("Actual Spending")
                .item_style(ItemStyle::new().color("#10b981"))
                .line_style(LineStyle::new().width(3))
                .data(actual),
        )
        .series(
            Line::new()
                .name("Predicted Spending")
                .item_style(ItemStyle::new().color("#3b82f6"))
                .line_style(LineStyle::new().width(2).type_(LineStyleType::Dashed))
                .data(predicted),
        )
}

/// Month by month comparison for the months that have actual spend.
fn variance_table(predictions: &[Prediction]) -> Markup {
    html!(
        div id="prediction-variance" class="mt-6"
        {
            h3 class="text-lg font-semibold mb-4" { "Actual vs Predicted Spending" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actual" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Predicted" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Difference" }
                        }
                    }
                    tbody
                    {
                        @for prediction in predictions {
                            @if let (Some(actual), Some(variance)) = (prediction.actual, prediction.variance_percent()) {
                                tr class=(TABLE_ROW_STYLE)
                                {
                                    th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                                    {
                                        (prediction.month)
                                    }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(actual)) }
                                    td class=(TABLE_CELL_STYLE) { (format_currency(prediction.predicted)) }
                                    td class=(TABLE_CELL_STYLE)
                                    {
                                        @if variance > 0.0 {
                                            span class="font-semibold text-red-600 dark:text-red-400"
                                            {
                                                "↑ " (format!("{:.1}%", variance.abs()))
                                            }
                                        } @else {
                                            span class="font-semibold text-emerald-600 dark:text-emerald-400"
                                            {
                                                "↓ " (format!("{:.1}%", variance.abs()))
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        insights::{
            data::predictions,
            predictions_page::{InsightsState, get_predictions_page, predictions_chart},
        },
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
        transaction::TransactionStore,
    };

    #[tokio::test]
    async fn renders_chart_and_variance_rows() {
        let state = InsightsState {
            store: Arc::new(Mutex::new(TransactionStore::default())),
        };

        let response = get_predictions_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(
            html.select(&Selector::parse("#predictions-chart").unwrap())
                .next()
                .is_some()
        );

        let rows: Vec<String> = html
            .select(&Selector::parse("#prediction-variance tbody tr").unwrap())
            .map(|row| {
                row.text()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        assert_eq!(
            rows,
            [
                "Jan $2,400.00 $2,500.00 ↓ 4.0%",
                "Feb $2,450.00 $2,300.00 ↑ 6.5%",
                "Mar $2,580.00 $2,600.00 ↓ 0.8%",
            ]
        );
    }

    #[test]
    fn chart_has_actual_and_predicted_series() {
        let options = predictions_chart(&predictions()).to_string();

        assert!(options.contains("Actual Spending"), "{options}");
        assert!(options.contains("Predicted Spending"), "{options}");
        assert!(options.contains("\"Jun\""), "{options}");
    }
}
