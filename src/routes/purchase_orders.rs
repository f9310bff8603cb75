use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::purchase_order::{NewPurchaseOrder, PurchaseOrderUpdate};
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
    let orders = db::purchase_orders::list(&state.pool, query.project_id).await?;
    Ok(Json(json!({ "purchaseOrders": orders })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewPurchaseOrder>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.number.is_empty() || req.vendor.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, number, vendor, amount, date".to_string(),
        ));
    }

    let order = db::purchase_orders::create(&state.pool, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A purchase order with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Purchase order created successfully",
            "purchaseOrder": order,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<PurchaseOrderUpdate>,
) -> Result<Json<Value>, AppError> {
    let order = db::purchase_orders::update(&state.pool, id, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A purchase order with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Purchase order not found".to_string()))?;

    Ok(Json(json!({
        "message": "Purchase order updated successfully",
        "purchaseOrder": order,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::purchase_orders::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Purchase order not found".to_string()));
    }
    Ok(Json(json!({ "message": "Purchase order deleted successfully" })))
}
