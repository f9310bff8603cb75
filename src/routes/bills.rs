use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::bill::{NewVendorBill, VendorBillUpdate};
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
    let bills = db::bills::list(&state.pool, query.project_id).await?;
    Ok(Json(json!({ "vendorBills": bills })))
}

pub async fn create(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewVendorBill>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if req.number.is_empty() || req.vendor.is_empty() {
        return Err(AppError::BadRequest(
            "Required fields: projectId, number, vendor, amount, date, dueDate".to_string(),
        ));
    }

    let bill = db::bills::create(&state.pool, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A vendor bill with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Vendor bill created successfully",
            "vendorBill": bill,
        })),
    ))
}

pub async fn update(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(req): Json<VendorBillUpdate>,
) -> Result<Json<Value>, AppError> {
    let bill = db::bills::update(&state.pool, id, &req)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("A vendor bill with this number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Vendor bill not found".to_string()))?;

    Ok(Json(json!({
        "message": "Vendor bill updated successfully",
        "vendorBill": bill,
    })))
}

pub async fn delete(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::bills::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Vendor bill not found".to_string()));
    }
    Ok(Json(json!({ "message": "Vendor bill deleted successfully" })))
}
