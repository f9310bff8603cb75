//! Read-side queries feeding the analytics aggregation. Each function
//! is an independent snapshot; missing aggregates coalesce to zero in
//! SQL rather than surfacing as NULL decode errors.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::analytics::{HourSplit, TaskCounts};

pub async fn task_counts(pool: &PgPool) -> Result<TaskCounts, sqlx::Error> {
    let (total, completed): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'done') FROM tasks")
            .fetch_one(pool)
            .await?;
    Ok(TaskCounts { total, completed })
}

pub async fn total_hours(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
    sqlx::query_scalar("SELECT COALESCE(SUM(hours), 0) FROM timesheets")
        .fetch_one(pool)
        .await
}

pub async fn hour_split(pool: &PgPool) -> Result<HourSplit, sqlx::Error> {
    let (billable, non_billable): (Decimal, Decimal) = sqlx::query_as(
        "SELECT COALESCE(SUM(hours) FILTER (WHERE billable), 0),
                COALESCE(SUM(hours) FILTER (WHERE NOT billable), 0)
         FROM timesheets",
    )
    .fetch_one(pool)
    .await?;
    Ok(HourSplit {
        billable,
        non_billable,
    })
}

/// All customer invoice amounts count as revenue regardless of status;
/// draft invoices weigh the same as paid ones.
pub async fn invoice_revenue(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
    sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM customer_invoices")
        .fetch_one(pool)
        .await
}

pub async fn bill_and_expense_cost(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT (SELECT COALESCE(SUM(amount), 0) FROM vendor_bills)
              + (SELECT COALESCE(SUM(amount), 0) FROM expenses)",
    )
    .fetch_one(pool)
    .await
}

pub async fn hours_by_employee(pool: &PgPool) -> Result<Vec<(String, Decimal)>, sqlx::Error> {
    sqlx::query_as("SELECT employee, SUM(hours) FROM timesheets GROUP BY employee ORDER BY employee")
        .fetch_all(pool)
        .await
}
