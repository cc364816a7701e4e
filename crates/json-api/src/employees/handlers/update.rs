//! Update Employee Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use personnel_app::domain::{departments::records::DepartmentId, employees::records::EmployeeId};

use crate::{
    employees::{create::EmployeeRequest, get::EmployeeResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
    validation::Validate,
};

/// Update Employee Handler
///
/// Overwrites the employee and its address and moves it to the department in
/// the path.
#[endpoint(
    tags("employees"),
    summary = "Update Employee",
    responses(
        (status_code = StatusCode::OK, description = "Employee updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee or department not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "employees.update",
    skip(department, employee, json, depot),
    fields(
        department_id = tracing::field::Empty,
        employee_id = tracing::field::Empty
    ),
    err(Debug)
)]
pub(crate) async fn handler(
    department: PathParam<i64>,
    employee: PathParam<i64>,
    json: JsonBody<EmployeeRequest>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let department = DepartmentId::from_i64(department.into_inner());
    let employee = EmployeeId::from_i64(employee.into_inner());
    let request = json.into_inner().validated()?;

    let span = tracing::Span::current();

    span.record("department_id", tracing::field::display(department));
    span.record("employee_id", tracing::field::display(employee));

    let updated = state
        .app
        .employees
        .update_employee(department, employee, request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(updated.into()))
}
