use sqlx::PgPool;

use crate::models::invoice::{CustomerInvoiceUpdate, NewCustomerInvoice};
use crate::models::CustomerInvoice;

pub async fn list(
    pool: &PgPool,
    project_id: Option<i64>,
) -> Result<Vec<CustomerInvoice>, sqlx::Error> {
    sqlx::query_as::<_, CustomerInvoice>(
        "SELECT * FROM customer_invoices
         WHERE ($1::bigint IS NULL OR project_id = $1)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    req: &NewCustomerInvoice,
) -> Result<CustomerInvoice, sqlx::Error> {
    sqlx::query_as::<_, CustomerInvoice>(
        "INSERT INTO customer_invoices (project_id, sales_order_id, number, customer, amount,
                                        date, due_date, status, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(req.project_id)
    .bind(req.sales_order_id)
    .bind(&req.number)
    .bind(&req.customer)
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
    req: &CustomerInvoiceUpdate,
) -> Result<Option<CustomerInvoice>, sqlx::Error> {
    sqlx::query_as::<_, CustomerInvoice>(
        "UPDATE customer_invoices
         SET number = $2, customer = $3, amount = $4, date = $5, due_date = $6,
             status = $7, description = $8, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.number)
    .bind(&req.customer)
    .bind(req.amount)
    .bind(req.date)
    .bind(req.due_date)
    .bind(&req.status)
    .bind(&req.description)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM customer_invoices WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
