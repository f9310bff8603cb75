use sqlx::PgPool;

use crate::models::timesheet::{NewTimesheet, TimesheetUpdate};
use crate::models::Timesheet;

pub async fn list(
    pool: &PgPool,
    project_id: Option<i64>,
    task_id: Option<i64>,
) -> Result<Vec<Timesheet>, sqlx::Error> {
    sqlx::query_as::<_, Timesheet>(
        "SELECT * FROM timesheets
         WHERE ($1::bigint IS NULL OR project_id = $1)
           AND ($2::bigint IS NULL OR task_id = $2)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .bind(task_id)
    .fetch_all(pool)
    .await
}

/// Insert a timesheet and bump the referenced task's hours_logged
/// running total in the same transaction. The total is only ever
/// incremented here; timesheet edits and deletes do not adjust it.
pub async fn create(pool: &PgPool, req: &NewTimesheet) -> Result<Timesheet, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let timesheet = sqlx::query_as::<_, Timesheet>(
        "INSERT INTO timesheets (project_id, task_id, employee, date, hours, billable, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(req.project_id)
    .bind(req.task_id)
    .bind(&req.employee)
    .bind(req.date)
    .bind(req.hours)
    .bind(req.billable.unwrap_or(true))
    .bind(req.description.as_deref().unwrap_or(""))
    .fetch_one(&mut *tx)
    .await?;

    if let Some(task_id) = timesheet.task_id {
        sqlx::query(
            "UPDATE tasks SET hours_logged = hours_logged + $2, updated_at = now() WHERE id = $1",
        )
        .bind(task_id)
        .bind(timesheet.hours)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(timesheet)
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    req: &TimesheetUpdate,
) -> Result<Option<Timesheet>, sqlx::Error> {
    sqlx::query_as::<_, Timesheet>(
        "UPDATE timesheets
         SET employee = $2, date = $3, hours = $4, billable = $5, description = $6,
             updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.employee)
    .bind(req.date)
    .bind(req.hours)
    .bind(req.billable)
    .bind(&req.description)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM timesheets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
