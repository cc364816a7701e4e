//! Get Employee Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use personnel_app::domain::employees::records::{EmployeeId, EmployeeRecord};

use crate::{
    departments::get::DepartmentResponse, employees::into_api_error, errors::ApiError,
    extensions::*, state::State,
};

/// Employee Response
///
/// The owned address is flattened into the employee.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeResponse {
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_designation: Option<String>,
    pub phone_number: Option<String>,

    /// Street address
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,

    pub active: bool,
    pub deleted: bool,

    /// Referenced department, `null` when unassigned
    pub department: Option<DepartmentResponse>,
}

impl From<EmployeeRecord> for EmployeeResponse {
    fn from(employee: EmployeeRecord) -> Self {
        Self {
            employee_id: employee.id.into_i64(),
            active: employee.status.is_live(),
            deleted: employee.status.is_deleted(),
            employee_name: employee.name,
            employee_designation: employee.designation,
            phone_number: employee.phone_number,
            address: employee.address.street,
            city: employee.address.city,
            state: employee.address.state,
            pincode: employee.address.postal_code,
            department: employee.department.map(Into::into),
        }
    }
}

/// Get Employee Handler
#[endpoint(
    tags("employees"),
    summary = "Get Employee",
    responses(
        (status_code = StatusCode::OK, description = "Employee found"),
        (status_code = StatusCode::NOT_FOUND, description = "Employee not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    employee: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let employee = state
        .app
        .employees
        .get_employee(EmployeeId::from_i64(employee.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(employee.into()))
}
