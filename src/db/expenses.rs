use sqlx::PgPool;

use crate::models::expense::{ExpenseUpdate, NewExpense};
use crate::models::Expense;

pub async fn list(pool: &PgPool, project_id: Option<i64>) -> Result<Vec<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "SELECT * FROM expenses
         WHERE ($1::bigint IS NULL OR project_id = $1)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, req: &NewExpense) -> Result<Expense, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "INSERT INTO expenses (project_id, employee, amount, date, category, description,
                               billable, status, receipt)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(req.project_id)
    .bind(&req.employee)
    .bind(req.amount)
    .bind(req.date)
    .bind(&req.category)
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.billable.unwrap_or(false))
    .bind(req.status.as_deref().unwrap_or("pending"))
    .bind(req.receipt.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    req: &ExpenseUpdate,
) -> Result<Option<Expense>, sqlx::Error> {
    sqlx::query_as::<_, Expense>(
        "UPDATE expenses
         SET employee = $2, amount = $3, date = $4, category = $5, description = $6,
             billable = $7, status = $8, receipt = $9, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.employee)
    .bind(req.amount)
    .bind(req.date)
    .bind(&req.category)
    .bind(&req.description)
    .bind(req.billable)
    .bind(&req.status)
    .bind(req.receipt.as_deref())
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
