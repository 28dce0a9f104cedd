pub mod employees;
pub mod health;
pub mod orders;

pub use employees::{
    create_employee, delete_employee, get_employee, list_employees, replace_employee,
};
pub use health::health_handler;
pub use orders::list_orders;
