use sqlx::PgPool;

use crate::models::task::{NewTask, TaskUpdate};
use crate::models::Task;

pub async fn list(pool: &PgPool, project_id: Option<i64>) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks
         WHERE ($1::bigint IS NULL OR project_id = $1)
         ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, req: &NewTask) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (project_id, title, description, assignee, status, priority,
                            due_date, hours_logged, estimated_hours)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
    )
    .bind(req.project_id)
    .bind(&req.title)
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.assignee.as_str())
    .bind(req.status.as_deref().unwrap_or("new"))
    .bind(req.priority.as_deref().unwrap_or("medium"))
    .bind(req.due_date)
    .bind(req.hours_logged.unwrap_or_default())
    .bind(req.estimated_hours.unwrap_or_default())
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: i64, req: &TaskUpdate) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = $2, description = $3, assignee = $4, status = $5, priority = $6,
             due_date = $7, hours_logged = $8, estimated_hours = $9, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.assignee)
    .bind(&req.status)
    .bind(&req.priority)
    .bind(req.due_date)
    .bind(req.hours_logged)
    .bind(req.estimated_hours)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
