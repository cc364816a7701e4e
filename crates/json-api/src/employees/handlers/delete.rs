//! Delete Employee Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use personnel_app::domain::employees::records::EmployeeId;

use crate::{
    employees::{get::EmployeeResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Delete Employee Handler
///
/// Soft-deletes the employee together with its address.
#[endpoint(
    tags("employees"),
    summary = "Delete Employee",
    responses(
        (status_code = StatusCode::OK, description = "Employee deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    employee: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let employee = EmployeeId::from_i64(employee.into_inner());

    let deleted = state
        .app
        .employees
        .delete_employee(employee)
        .await
        .map_err(into_api_error)?;

    tracing::info!(employee_id = %employee, "deleted employee");

    Ok(Json(deleted.into()))
}
