//! Demonstration forecasts and anomalies.
//!
//! Neither list is computed from the recorded transactions. They are fixed
//! sample data that stand in for a forecasting model and an outlier detector.

use std::fmt::{self, Display};

use time::{Date, macros::date};

/// The forecast spend for one month, with the actual spend once it is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Short month label, e.g. "Jan".
    pub month: &'static str,
    /// The forecast spend in dollars.
    pub predicted: f64,
    /// The actual spend in dollars, `None` for months that have not happened yet.
    pub actual: Option<f64>,
}

impl Prediction {
    /// The signed difference between actual and predicted spend as a
    /// percentage of the prediction.
    ///
    /// Returns `None` if there is no actual spend to compare against.
    pub fn variance_percent(&self) -> Option<f64> {
        let actual = self.actual?;

        if self.predicted == 0.0 {
            return None;
        }

        Some((actual - self.predicted) / self.predicted * 100.0)
    }
}

/// How far an anomaly is from the usual spending pattern.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        })
    }
}

/// A transaction flagged as unusual.
#[derive(Debug, Clone, PartialEq)]
pub struct Anomaly {
    /// The ID of the flagged transaction.
    pub id: i64,
    /// Where the money was spent.
    pub merchant: &'static str,
    /// The amount spent in dollars.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// Why the transaction was flagged.
    pub reason: &'static str,
    /// How unusual the transaction is.
    pub severity: Severity,
}

/// The six month spending forecast.
pub fn predictions() -> [Prediction; 6] {
    [
        Prediction {
            month: "Jan",
            predicted: 2500.0,
            actual: Some(2400.0),
        },
        Prediction {
            month: "Feb",
            predicted: 2300.0,
            actual: Some(2450.0),
        },
        Prediction {
            month: "Mar",
            predicted: 2600.0,
            actual: Some(2580.0),
        },
        Prediction {
            month: "Apr",
            predicted: 2400.0,
            actual: None,
        },
        Prediction {
            month: "May",
            predicted: 2700.0,
            actual: None,
        },
        Prediction {
            month: "Jun",
            predicted: 2500.0,
            actual: None,
        },
    ]
}

/// The forecast for the first month without actual spend, i.e. next month.
pub fn next_month_forecast(predictions: &[Prediction]) -> Option<f64> {
    predictions
        .iter()
        .find(|prediction| prediction.actual.is_none())
        .map(|prediction| prediction.predicted)
}

/// The transactions flagged as unusual this month.
pub fn anomalies() -> Vec<Anomaly> {
    vec![
        Anomaly {
            id: 1,
            merchant: "Luxury Store XYZ",
            amount: 1200.0,
            date: date!(2024 - 01 - 15),
            reason: "Unusually high amount for shopping",
            severity: Severity::High,
        },
        Anomaly {
            id: 2,
            merchant: "Gas Station ABC",
            amount: 150.0,
            date: date!(2024 - 01 - 14),
            reason: "Higher than typical gas expense",
            severity: Severity::Medium,
        },
        Anomaly {
            id: 3,
            merchant: "Restaurant DEF",
            amount: 85.0,
            date: date!(2024 - 01 - 13),
            reason: "Above average dining cost",
            severity: Severity::Low,
        },
    ]
}
