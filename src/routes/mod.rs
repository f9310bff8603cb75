pub mod analytics;
pub mod auth;
pub mod bills;
pub mod expenses;
pub mod invoices;
pub mod projects;
pub mod purchase_orders;
pub mod sales_orders;
pub mod tasks;
pub mod timesheets;
pub mod users;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Users
        .route("/api/users", get(users::list))
        .route(
            "/api/users/profile",
            get(users::profile).put(users::update_profile),
        )
        .route("/api/users/password", put(users::change_password))
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Tasks
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        // Timesheets
        .route(
            "/api/timesheets",
            get(timesheets::list).post(timesheets::create),
        )
        .route(
            "/api/timesheets/{id}",
            put(timesheets::update).delete(timesheets::delete),
        )
        // Sales orders
        .route(
            "/api/sales-orders",
            get(sales_orders::list).post(sales_orders::create),
        )
        .route(
            "/api/sales-orders/{id}",
            put(sales_orders::update).delete(sales_orders::delete),
        )
        // Purchase orders
        .route(
            "/api/purchase-orders",
            get(purchase_orders::list).post(purchase_orders::create),
        )
        .route(
            "/api/purchase-orders/{id}",
            put(purchase_orders::update).delete(purchase_orders::delete),
        )
        // Customer invoices
        .route("/api/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/api/invoices/{id}",
            put(invoices::update).delete(invoices::delete),
        )
        // Vendor bills
        .route("/api/vendor-bills", get(bills::list).post(bills::create))
        .route(
            "/api/vendor-bills/{id}",
            put(bills::update).delete(bills::delete),
        )
        // Expenses
        .route("/api/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/api/expenses/{id}",
            put(expenses::update).delete(expenses::delete),
        )
        // Analytics
        .route("/api/analytics", get(analytics::summary))
}
