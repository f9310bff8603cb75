use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInvoice {
    pub id: i64,
    pub project_id: i64,
    pub sales_order_id: Option<i64>,
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomerInvoice {
    pub project_id: i64,
    #[serde(default)]
    pub sales_order_id: Option<i64>,
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInvoiceUpdate {
    pub number: String,
    pub customer: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub description: String,
}
