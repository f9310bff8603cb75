use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: i64,
    pub project_id: i64,
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesOrder {
    pub project_id: i64,
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderUpdate {
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: String,
    pub description: String,
}
