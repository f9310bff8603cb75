use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorBill {
    pub id: i64,
    pub project_id: i64,
    pub purchase_order_id: Option<i64>,
    pub number: String,
    pub vendor: String,
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
pub struct NewVendorBill {
    pub project_id: i64,
    #[serde(default)]
    pub purchase_order_id: Option<i64>,
    pub number: String,
    pub vendor: String,
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
pub struct VendorBillUpdate {
    pub number: String,
    pub vendor: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub description: String,
}
