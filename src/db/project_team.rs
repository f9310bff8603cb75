//! Project team membership synchronization.
//!
//! Callers supply team members as display names; rows in project_team
//! hold resolved user ids. Names that match no user are dropped without
//! error, and duplicate names collapse because resolution returns each
//! matching user once. The multi-statement attach/replace sequences run
//! on a caller-provided transaction connection so a mid-sequence failure
//! never leaves a half-replaced team.

use sqlx::PgConnection;

/// Resolve display names to user ids. Unknown names are omitted from
/// the result.
pub async fn resolve_user_ids<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    names: &[String],
) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE name = ANY($1)")
        .bind(names)
        .fetch_all(executor)
        .await
}

/// Insert a membership row. Re-adding an existing member is a no-op.
pub async fn upsert_member<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i64,
    user_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO project_team (project_id, user_id) VALUES ($1, $2)
         ON CONFLICT (project_id, user_id) DO NOTHING",
    )
    .bind(project_id)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Remove all membership rows for a project.
pub async fn clear<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    project_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM project_team WHERE project_id = $1")
        .bind(project_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Attach every resolvable name to the project. Used on project create.
pub async fn attach(
    conn: &mut PgConnection,
    project_id: i64,
    names: &[String],
) -> Result<(), sqlx::Error> {
    let user_ids = resolve_user_ids(&mut *conn, names).await?;
    for user_id in user_ids {
        upsert_member(&mut *conn, project_id, user_id).await?;
    }
    Ok(())
}

/// Replace the project's membership with the resolvable subset of
/// `names`. An empty list clears the team entirely.
pub async fn replace(
    conn: &mut PgConnection,
    project_id: i64,
    names: &[String],
) -> Result<(), sqlx::Error> {
    clear(&mut *conn, project_id).await?;
    attach(conn, project_id, names).await
}
