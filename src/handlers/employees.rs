use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};
use uuid::Uuid;

use crate::assembler;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{EmployeeInput, EmployeeListResponse, EmployeeModel};
use crate::routes;
use crate::state::AppState;
use crate::store::Employee;

/// GET /employees handler - List every employee
///
/// Each element carries its own self link; the envelope carries the single
/// collection-level self link.
#[utoipa::path(
    get,
    path = routes::EMPLOYEES,
    responses(
        (status = 200, description = "Every stored employee", body = EmployeeListResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<EmployeeListResponse>), ApiError> {
    let data: Vec<EmployeeModel> = state
        .employees
        .find_all()?
        .iter()
        .map(|(id, employee)| assembler::employee_list_item(*id, employee))
        .collect();

    tracing::info!("Listed {} employees", data.len());
    Ok((
        StatusCode::OK,
        Json(EmployeeListResponse {
            data,
            links: assembler::collection_links(routes::EMPLOYEES),
        }),
    ))
}

/// POST /employees handler - Create a new employee
///
/// Storage assigns the identity; the Location header points at the new
/// record's self link.
#[utoipa::path(
    post,
    path = routes::EMPLOYEES,
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee created", body = EmployeeModel),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<EmployeeModel>), ApiError> {
    let record = Employee {
        name: input.name,
        role: input.role,
    };
    let id = state.employees.save(None, record.clone())?;
    let model = assembler::employee_model(id, &record);

    tracing::info!("Created employee {}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, model.links.self_link.href.clone())],
        Json(model),
    ))
}

/// GET /employees/:id handler - Retrieve a single employee
#[utoipa::path(
    get,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Identity of the employee")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeModel),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<EmployeeModel>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.employees.find_by_id(id)? {
        Some(employee) => {
            tracing::info!("Retrieved employee {}", id);
            Ok((
                StatusCode::OK,
                Json(assembler::employee_model(id, &employee)),
            ))
        }
        None => {
            tracing::info!("Employee not found: {}", id);
            Err(ApiError::EmployeeNotFound(id))
        }
    }
}

/// PUT /employees/:id handler - Replace an employee
///
/// Overwrites the stored name and role when the identity exists. When it
/// does not, the candidate is stored as a new record under a fresh
/// identity, so the response id can differ from the one requested. Both
/// paths answer 201 with a Location header equal to the self link.
#[utoipa::path(
    put,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Identity to replace")
    ),
    request_body = EmployeeInput,
    responses(
        (status = 201, description = "Employee replaced or created", body = EmployeeModel),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(input): Json<EmployeeInput>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<EmployeeModel>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let record = Employee {
        name: input.name,
        role: input.role,
    };
    let assigned = match state.employees.find_by_id(id)? {
        Some(_) => state.employees.save(Some(id), record.clone())?,
        None => state.employees.save(None, record.clone())?,
    };
    let model = assembler::employee_model(assigned, &record);

    tracing::info!("Replaced employee {} (stored as {})", id, assigned);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, model.links.self_link.href.clone())],
        Json(model),
    ))
}

/// DELETE /employees/:id handler - Delete an employee
///
/// Idempotent: deleting an identity that was never stored (or was already
/// deleted) still answers 204.
#[utoipa::path(
    delete,
    path = routes::EMPLOYEE,
    params(
        ("id" = String, Path, description = "Identity of the employee")
    ),
    responses(
        (status = 204, description = "Employee deleted or already absent"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    state.employees.delete_by_id(id)?;

    tracing::info!("Deleted employee {}", id);
    Ok(StatusCode::NO_CONTENT)
}
