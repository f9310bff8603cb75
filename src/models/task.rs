use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub status: String,
    pub priority: String,
    pub due_date: NaiveDate,
    /// Running total of timesheet hours booked against this task.
    /// Incremented on timesheet creation only, never recomputed.
    pub hours_logged: Decimal,
    pub estimated_hours: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub project_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assignee: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub hours_logged: Option<Decimal>,
    #[serde(default)]
    pub estimated_hours: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub status: String,
    pub priority: String,
    pub due_date: NaiveDate,
    pub hours_logged: Decimal,
    pub estimated_hours: Decimal,
}
