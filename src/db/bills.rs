use sqlx::PgPool;

use crate::models::bill::{NewVendorBill, VendorBillUpdate};
use crate::models::VendorBill;

pub async fn list(pool: &PgPool, project_id: Option<i64>) -> Result<Vec<VendorBill>, sqlx::Error> {
    sqlx::query_as::<_, VendorBill>(
        "SELECT * FROM vendor_bills
         WHERE ($1::bigint IS NULL OR project_id = $1)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, req: &NewVendorBill) -> Result<VendorBill, sqlx::Error> {
    sqlx::query_as::<_, VendorBill>(
        "INSERT INTO vendor_bills (project_id, purchase_order_id, number, vendor, amount,
                                   date, due_date, status, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(req.project_id)
    .bind(req.purchase_order_id)
    .bind(&req.number)
    .bind(&req.vendor)
    .bind(req.amount)
    .bind(req.date)
    .bind(req.due_date)
    .bind(req.status.as_deref().unwrap_or("draft"))
    .bind(req.description.as_deref().unwrap_or(""))
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    req: &VendorBillUpdate,
) -> Result<Option<VendorBill>, sqlx::Error> {
    sqlx::query_as::<_, VendorBill>(
        "UPDATE vendor_bills
         SET number = $2, vendor = $3, amount = $4, date = $5, due_date = $6,
             status = $7, description = $8, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.number)
    .bind(&req.vendor)
    .bind(req.amount)
    .bind(req.date)
    .bind(req.due_date)
    .bind(&req.status)
    .bind(&req.description)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vendor_bills WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
