use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::sales_order::{NewSalesOrder, SalesOrderUpdate};
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
    let orders = db::sales_orders::list(&state.pool, query.project_id).await?;
    Ok(Json(json!({ "salesOrders": orders })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewSalesOrder>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.number.is_empty() || req.customer.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, number, customer, amount, date".to_string(),
        ));
    }

    let order = db::sales_orders::create(&state.pool, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A sales order with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Sales order created successfully",
            "salesOrder": order,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<SalesOrderUpdate>,
) -> Result<Json<Value>, AppError> {
    let order = db::sales_orders::update(&state.pool, id, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A sales order with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Sales order not found".to_string()))?;

    Ok(Json(json!({
        "message": "Sales order updated successfully",
        "salesOrder": order,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::sales_orders::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Sales order not found".to_string()));
    }
    Ok(Json(json!({ "message": "Sales order deleted successfully" })))
}
