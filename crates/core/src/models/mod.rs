pub mod advice;
pub mod budget;
pub mod chart;
pub mod dashboard;
pub mod expense;
pub mod forms;
pub mod notification;
pub mod overview;
pub mod settings;
pub mod stats;
pub mod user;

/// Format a monetary amount the way every view displays it (`$1234.50`).
#[must_use]
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}
