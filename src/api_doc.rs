use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    CollectionLinks, EmployeeInput, EmployeeListResponse, EmployeeModel, Link, OrderListResponse,
    OrderModel, ResourceLinks,
};
use crate::store::OrderStatus;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "payroll-api",
        version = "1.0.0",
        description = "A minimal hypermedia CRUD service for employees and orders"
    ),
    paths(
        handlers::health::health_handler,
        handlers::employees::list_employees,
        handlers::employees::create_employee,
        handlers::employees::get_employee,
        handlers::employees::replace_employee,
        handlers::employees::delete_employee,
        handlers::orders::list_orders
    ),
    components(
        schemas(
            EmployeeInput,
            EmployeeModel,
            EmployeeListResponse,
            OrderModel,
            OrderListResponse,
            OrderStatus,
            Link,
            ResourceLinks,
            CollectionLinks,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "employees", description = "Employee resource operations"),
        (name = "orders", description = "Order resource operations")
    )
)]
pub struct ApiDoc;
