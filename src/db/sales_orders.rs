use sqlx::PgPool;

use crate::models::sales_order::{NewSalesOrder, SalesOrderUpdate};
use crate::models::SalesOrder;

pub async fn list(pool: &PgPool, project_id: Option<i64>) -> Result<Vec<SalesOrder>, sqlx::Error> {
    sqlx::query_as::<_, SalesOrder>(
        "SELECT * FROM sales_orders
         WHERE ($1::bigint IS NULL OR project_id = $1)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, req: &NewSalesOrder) -> Result<SalesOrder, sqlx::Error> {
    sqlx::query_as::<_, SalesOrder>(
        "INSERT INTO sales_orders (project_id, number, customer, amount, date, status, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(req.project_id)
    .bind(&req.number)
    .bind(&req.customer)
    .bind(req.amount)
    .bind(req.date)
    .bind(req.status.as_deref().unwrap_or("draft"))
    .bind(req.description.as_deref().unwrap_or(""))
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    req: &SalesOrderUpdate,
) -> Result<Option<SalesOrder>, sqlx::Error> {
    sqlx::query_as::<_, SalesOrder>(
        "UPDATE sales_orders
         SET number = $2, customer = $3, amount = $4, date = $5, status = $6,
             description = $7, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.number)
    .bind(&req.customer)
    .bind(req.amount)
    .bind(req.date)
    .bind(&req.status)
    .bind(&req.description)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sales_orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
