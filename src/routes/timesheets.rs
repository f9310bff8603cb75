use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::timesheet::{NewTimesheet, TimesheetUpdate};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub task_id: Option<i64>,
}

pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, AppError> {
    let timesheets = db::timesheets::list(&state.pool, query.project_id, query.task_id).await?;
    Ok(Json(json!({ "timesheets": timesheets })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewTimesheet>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.employee.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, employee, date, hours".to_string(),
        ));
    }

    let timesheet = db::timesheets::create(&state.pool, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Timesheet created successfully",
            "timesheet": timesheet,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<TimesheetUpdate>,
) -> Result<Json<Value>, AppError> {
    let timesheet = db::timesheets::update(&state.pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Timesheet not found".to_string()))?;

    Ok(Json(json!({
        "message": "Timesheet updated successfully",
        "timesheet": timesheet,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::timesheets::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Timesheet not found".to_string()));
    }
    Ok(Json(json!({ "message": "Timesheet deleted successfully" })))
}
