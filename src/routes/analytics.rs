use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::analytics;
use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

/// Dashboard snapshot, recomputed from the store on every call. Any
/// failing read aborts the whole response; there is no partial result.
pub async fn summary(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Value>, AppError> {
    let projects = db::projects::list_all(&state.pool).await?;
    let tasks = db::analytics::task_counts(&state.pool).await?;
    let total_hours = db::analytics::total_hours(&state.pool).await?;
    let split = db::analytics::hour_split(&state.pool).await?;
    let revenue = db::analytics::invoice_revenue(&state.pool).await?;
    let cost = db::analytics::bill_and_expense_cost(&state.pool).await?;
    let by_employee = db::analytics::hours_by_employee(&state.pool).await?;

    let summary = analytics::summarize(
        &projects,
        tasks,
        total_hours,
        split,
        revenue,
        cost,
        by_employee,
    );

    Ok(Json(json!({ "analytics": summary })))
}
