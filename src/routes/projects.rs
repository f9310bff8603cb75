use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::project::{NewProject, ProjectUpdate};
use crate::state::SharedState;

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let projects = db::projects::list_with_team(&state.pool).await?;
    Ok(Json(json!({ "projects": projects })))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let project = db::projects::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(json!({ "project": project })))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewProject>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.name.is_empty() || req.manager.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: name, manager, startDate, endDate".to_string(),
        ));
    }

    // Insert and team attachment commit together; a failed name
    // resolution or membership insert rolls back the project row too.
    let mut tx = state.pool.begin().await?;
    let project = db::projects::create(&mut *tx, &req, auth.user_id).await?;
    if let Some(team) = &req.team {
        db::project_team::attach(&mut tx, project.id, team).await?;
    }
    tx.commit().await?;

    let project = db::projects::find_with_team(&state.pool, project.id)
        .await?
        .ok_or_else(|| AppError::Internal("Created project not found".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Project created successfully",
            "project": project,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<ProjectUpdate>,
) -> Result<Json<Value>, AppError> {
    let mut tx = state.pool.begin().await?;

    let project = db::projects::update(&mut *tx, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    // Team semantics: omitted leaves membership untouched, a supplied
    // list (including empty) replaces it wholesale.
    if let Some(team) = &req.team {
        db::project_team::replace(&mut tx, project.id, team).await?;
    }

    tx.commit().await?;

    let project = db::projects::find_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    Ok(Json(json!({
        "message": "Project updated successfully",
        "project": project,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::projects::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }
    Ok(Json(json!({ "message": "Project deleted successfully" })))
}
