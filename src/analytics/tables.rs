//! Table views for the category breakdown.

use maud::{Markup, html};

use crate::{
    analytics::{aggregation::CategoryAggregate, charts::CATEGORY_PALETTE},
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

const TABLE_NUMBER_CELL_STYLE: &str = "px-6 py-4 text-right whitespace-nowrap";

/// The share of `total` that `amount` makes up, as a whole percentage.
fn share_percent(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        (amount / total * 100.0).round()
    }
}

/// Renders a table with the total, count and share of spend for each category.
///
/// The colour swatch next to each name matches the category's slice in the pie chart.
pub(super) fn category_breakdown_table(categories: &[CategoryAggregate]) -> Markup {
    if categories.is_empty() {
        return html! {};
    }

    let total: f64 = categories.iter().map(|aggregate| aggregate.total_amount).sum();

    html! {
        div id="category-breakdown" {
            h3 class="text-lg font-semibold mb-4" { "Category Breakdown" }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_NUMBER_CELL_STYLE) { "Transactions" }
                            th scope="col" class=(TABLE_NUMBER_CELL_STYLE) { "Total" }
                            th scope="col" class=(TABLE_NUMBER_CELL_STYLE) { "Share" }
                        }
                    }
                    tbody {
                        @for (index, aggregate) in categories.iter().enumerate() {
                            tr class=(TABLE_ROW_STYLE) {
                                th
                                    scope="row"
                                    class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
                                {
                                    span
                                        class="inline-block w-3 h-3 mr-2 rounded-full"
                                        style={"background-color: " (CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()])}
                                    {}
                                    (aggregate.category)
                                }
                                td class=(TABLE_NUMBER_CELL_STYLE) { (aggregate.count) }
                                td class=(TABLE_NUMBER_CELL_STYLE) { (format_currency(aggregate.total_amount)) }
                                td class=(TABLE_NUMBER_CELL_STYLE) {
                                    (share_percent(aggregate.total_amount, total)) "%"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        analytics::{aggregation::CategoryAggregate, tables::category_breakdown_table},
        transaction::Category,
    };

    #[test]
    fn renders_nothing_without_categories() {
        assert_eq!(category_breakdown_table(&[]).into_string(), "");
    }

    #[test]
    fn renders_one_row_per_category() {
        let categories = [
            CategoryAggregate {
                category: Category::Food,
                total_amount: 25.0,
                count: 2,
            },
            CategoryAggregate {
                category: Category::Bills,
                total_amount: 75.0,
                count: 1,
            },
        ];

        let markup = category_breakdown_table(&categories).into_string();
        let html = Html::parse_fragment(&markup);

        let rows: Vec<Vec<String>> = html
            .select(&Selector::parse("tbody tr").unwrap())
            .map(|row| {
                row.select(&Selector::parse("th, td").unwrap())
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                vec!["Food", "2", "$25.00", "25%"],
                vec!["Bills", "1", "$75.00", "75%"],
            ]
        );
    }
}
