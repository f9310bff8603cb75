use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: i64,
    pub project_id: i64,
    pub task_id: Option<i64>,
    /// Display name, not a foreign key. Matched against other rows by
    /// string equality when aggregating utilization.
    pub employee: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub billable: bool,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimesheet {
    pub project_id: i64,
    #[serde(default)]
    pub task_id: Option<i64>,
    pub employee: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    #[serde(default)]
    pub billable: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetUpdate {
    pub employee: String,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub billable: bool,
    pub description: String,
}
