pub mod bill;
pub mod expense;
pub mod invoice;
pub mod project;
pub mod purchase_order;
pub mod sales_order;
pub mod task;
pub mod timesheet;
pub mod user;

pub use bill::VendorBill;
pub use expense::Expense;
pub use invoice::CustomerInvoice;
pub use project::{Project, ProjectWithTeam};
pub use purchase_order::PurchaseOrder;
pub use sales_order::SalesOrder;
pub use task::Task;
pub use timesheet::Timesheet;
pub use user::User;
