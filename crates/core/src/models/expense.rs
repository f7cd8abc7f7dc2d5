use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format_usd;

/// Spending category. The set is fixed; the backend's AI categorizer
/// only ever assigns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Education,
    /// Catch-all. Unknown labels from the backend also land here.
    #[serde(other)]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Healthcare,
        Category::Education,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Case-insensitive parse of a category label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| format!("Unknown category '{s}'"))
    }
}

/// A single recorded spending transaction.
///
/// Created by the backend from a [`NewExpense`]; the client never edits one
/// in place, it only lists and deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,

    /// Always positive
    pub amount: f64,

    pub description: String,

    pub category: Category,

    /// Calendar date of the expense (`YYYY-MM-DD` on the wire; a trailing
    /// time part, as sent for datetime columns, is ignored)
    #[serde(deserialize_with = "date_prefix")]
    pub date: NaiveDate,

    /// True when the category was assigned by the backend's AI categorizer
    #[serde(default)]
    pub ai_categorized: bool,
}

/// Reads the leading `YYYY-MM-DD` of a date or datetime string.
fn date_prefix<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let day = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| serde::de::Error::custom(format!("invalid expense date '{raw}': {e}")))
}

impl Expense {
    /// Whether this expense falls in the given calendar month.
    #[must_use]
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }
}

/// Body of `POST /expenses`.
///
/// `category` is left out of the JSON entirely when `None`, which asks the
/// backend to categorize the expense itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Optional month/year narrowing of the expense list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// 1-12
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ExpenseFilter {
    #[must_use]
    pub fn month(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
        }
    }

    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        self.month.map_or(true, |m| expense.date.month() == m)
            && self.year.map_or(true, |y| expense.date.year() == y)
    }
}

/// One rendered row of the expense list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRow {
    /// Target for the delete affordance
    pub id: Uuid,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    /// e.g. `$12.50`
    pub amount: String,
    /// Show the "AI" badge
    pub ai_categorized: bool,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            description: expense.description.clone(),
            category: expense.category,
            date: expense.date,
            amount: format_usd(expense.amount),
            ai_categorized: expense.ai_categorized,
        }
    }
}

/// The expense list as the UI renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExpenseListView {
    Empty,
    Rows(Vec<ExpenseRow>),
}

impl ExpenseListView {
    pub const EMPTY_MESSAGE: &'static str = "No expenses yet. Start tracking your spending!";

    #[must_use]
    pub fn rows(&self) -> &[ExpenseRow] {
        match self {
            ExpenseListView::Empty => &[],
            ExpenseListView::Rows(rows) => rows,
        }
    }
}
