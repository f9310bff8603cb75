use sqlx::PgPool;

use crate::models::project::{NewProject, ProjectUpdate};
use crate::models::{Project, ProjectWithTeam};

// Projects joined with their distinct team member names. The FILTER
// keeps projects with no team from producing a [NULL] array.
const SELECT_WITH_TEAM: &str = "SELECT p.*,
    COALESCE(array_agg(DISTINCT u.name) FILTER (WHERE u.name IS NOT NULL), '{}') AS team
 FROM projects p
 LEFT JOIN project_team pt ON pt.project_id = p.id
 LEFT JOIN users u ON u.id = pt.user_id";

pub async fn list_with_team(pool: &PgPool) -> Result<Vec<ProjectWithTeam>, sqlx::Error> {
    sqlx::query_as::<_, ProjectWithTeam>(&format!(
        "{SELECT_WITH_TEAM} GROUP BY p.id ORDER BY p.created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_with_team(
    pool: &PgPool,
    id: i64,
) -> Result<Option<ProjectWithTeam>, sqlx::Error> {
    sqlx::query_as::<_, ProjectWithTeam>(&format!(
        "{SELECT_WITH_TEAM} WHERE p.id = $1 GROUP BY p.id"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Snapshot of all project rows, used by the analytics aggregation.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    req: &NewProject,
    created_by: i64,
) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (name, description, status, manager, start_date, end_date,
                               budget, spent, progress, created_by)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(&req.name)
    .bind(req.description.as_deref().unwrap_or(""))
    .bind(req.status.as_deref().unwrap_or("planned"))
    .bind(&req.manager)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(req.budget.unwrap_or_default())
    .bind(req.spent.unwrap_or_default())
    .bind(req.progress.unwrap_or(0))
    .bind(created_by)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    id: i64,
    req: &ProjectUpdate,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects
         SET name = $2, description = $3, status = $4, manager = $5, start_date = $6,
             end_date = $7, budget = $8, spent = $9, progress = $10, updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&req.name)
    .bind(&req.description)
    .bind(&req.status)
    .bind(&req.manager)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(req.budget)
    .bind(req.spent)
    .bind(req.progress)
    .fetch_optional(executor)
    .await
}

/// Returns the number of rows deleted; children cascade in the store.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
