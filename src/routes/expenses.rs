use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::expense::{ExpenseUpdate, NewExpense};
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
    let expenses = db::expenses::list(&state.pool, query.project_id).await?;
    Ok(Json(json!({ "expenses": expenses })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewExpense>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.employee.is_empty() || req.category.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, employee, amount, date, category".to_string(),
        ));
    }

    let expense = db::expenses::create(&state.pool, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Expense created successfully",
            "expense": expense,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<ExpenseUpdate>,
) -> Result<Json<Value>, AppError> {
    let expense = db::expenses::update(&state.pool, id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Expense not found".to_string()))?;

    Ok(Json(json!({
        "message": "Expense updated successfully",
        "expense": expense,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::expenses::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Expense not found".to_string()));
    }
    Ok(Json(json!({ "message": "Expense deleted successfully" })))
}
