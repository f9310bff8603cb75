pub mod analytics;
pub mod bills;
pub mod expenses;
pub mod invoices;
pub mod project_team;
pub mod projects;
pub mod purchase_orders;
pub mod sales_orders;
pub mod tasks;
pub mod timesheets;
pub mod users;
