pub mod advice_service;
pub mod auth_service;
pub mod budget_service;
pub mod chart_service;
pub mod dashboard_service;
pub mod expense_service;
pub mod overview_service;
