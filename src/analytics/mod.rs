//! Derived views over the recorded transactions.
//!
//! This module contains:
//! - Pure aggregation functions (totals, averages, search and the per-category breakdown)
//! - The category charts, breakdown table and recent activity panel
//! - The analytics page handler

mod aggregation;
mod charts;
mod page;
mod tables;

pub use aggregation::{
    CategoryAggregate, SpendingSummary, average, by_category, count_in_month, filter, total,
};
pub(crate) use charts::{PageChart, chart_container, charts_script, currency_formatter};
pub use page::get_analytics_page;
