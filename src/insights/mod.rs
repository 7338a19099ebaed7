//! Demonstration forecasts and anomaly detection.
//!
//! This module contains:
//! - The fixed sample predictions and anomalies
//! - The ML Predictions page with the forecast chart
//! - The Anomalies page

mod anomalies_page;
mod data;
mod predictions_page;

pub use anomalies_page::get_anomalies_page;
pub use data::{Anomaly, Prediction, Severity, anomalies, next_month_forecast, predictions};
pub use predictions_page::get_predictions_page;
