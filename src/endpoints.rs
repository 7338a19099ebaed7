//! The API endpoints URIs.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for adding, searching and listing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page with the category breakdown charts.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The page with the spending forecast.
pub const PREDICTIONS_VIEW: &str = "/predictions";
/// The page listing unusual transactions.
pub const ANOMALIES_VIEW: &str = "/anomalies";
/// The page for asking questions about spending.
pub const CHAT_VIEW: &str = "/chat";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to ask a question about spending.
pub const QUERY_API: &str = "/api/query";
/// The route for the greeting shown in the page banner.
pub const BANNER_API: &str = "/api/data/";
