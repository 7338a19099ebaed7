//! Chart generation and rendering.
//!
//! Charts are built as ECharts configuration with `charming` and rendered as
//! empty containers plus an initialisation script that runs once the page has
//! loaded:
//! - **Spending by Category**: pie chart of the total spend per category
//! - **Transaction Count by Category**: bar chart of the number of transactions per category

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{
        AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction, Label, Tooltip,
        Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{analytics::aggregation::CategoryAggregate, html::HeadElement};

/// The colours for the pie slices, assigned to the categories in order.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#10b981", "#3b82f6", "#8b5cf6", "#ef4444", "#f59e0b", "#6b7280",
];

/// A chart with its HTML container ID and ECharts configuration.
pub(crate) struct PageChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the empty container that the chart with `id` is drawn into.
pub(crate) fn chart_container(id: &str) -> Markup {
    html!(
        div
            id=(id)
            class="min-h-[300px] h-[300px] rounded dark:bg-gray-100"
        {}
    )
}

/// Generates JavaScript initialization code for `charts`.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(crate) fn charts_script(charts: &[PageChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom) return;
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Pie chart of the total spend per category, labelled "name percent%".
pub(crate) fn spending_by_category_chart(categories: &[CategoryAggregate]) -> Chart {
    let data: Vec<(f64, &str)> = categories
        .iter()
        .map(|aggregate| (aggregate.total_amount, aggregate.category.name()))
        .collect();

    Chart::new()
        .color(CATEGORY_PALETTE.into_iter().map(Color::from).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(
            Pie::new()
                .name("Spending")
                .radius("65%")
                .label(Label::new().show(true).formatter(percent_label_formatter()))
                .data(data),
        )
}

/// Bar chart of the number of transactions per category.
pub(crate) fn transaction_count_chart(categories: &[CategoryAggregate]) -> Chart {
    let (labels, counts): (Vec<&str>, Vec<i64>) = categories
        .iter()
        .map(|aggregate| (aggregate.category.name(), aggregate.count as i64))
        .unzip();

    Chart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Bar::new()
                .name("Transactions")
                .item_style(ItemStyle::new().color("#10b981"))
                .data(counts),
        )
}

fn percent_label_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "params",
        "return params.name + ' ' + Math.round(params.percent) + '%';",
    )
}

#[inline]
pub(crate) fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
