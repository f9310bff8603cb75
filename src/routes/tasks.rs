use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::task::{NewTask, TaskUpdate};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub project_id: Option<i64>,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, AppError> {
    let tasks = db::tasks::list(&state.pool, query.project_id).await?;
    Ok(Json(json!({ "tasks": tasks })))
}

pub async fn get(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let task = db::tasks::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
    Ok(Json(json!({ "task": task })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewTask>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.title.is_empty() || req.assignee.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, title, assignee, dueDate".to_string(),
        ));
    }

    let task = db::tasks::create(&state.pool, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Task created successfully",
            "task": task,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<TaskUpdate>,
) -> Result<Json<Value>, AppError> {
    let task = db::tasks::update(&state.pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

    Ok(Json(json!({
        "message": "Task updated successfully",
        "task": task,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::tasks::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Task not found".to_string()));
    }
    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
