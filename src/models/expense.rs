use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub project_id: i64,
    pub employee: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub billable: bool,
    pub status: String,
    pub receipt: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub project_id: i64,
    pub employee: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub receipt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub employee: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub billable: bool,
    pub status: String,
    #[serde(default)]
    pub receipt: Option<String>,
}
