// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const EMPLOYEES: &str = "/employees";
pub const EMPLOYEE: &str = "/employees/{id}";
pub const ORDERS: &str = "/orders";
