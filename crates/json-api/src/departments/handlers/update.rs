//! Update Department Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use personnel_app::domain::departments::{data::DepartmentUpdate, records::DepartmentId};

use crate::{
    departments::{get::DepartmentResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
    validation::{FieldErrors, Validate},
};

/// Update Department Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateDepartmentRequest {
    #[serde(default)]
    pub dept_name: String,

    #[serde(default)]
    pub dept_description: Option<String>,

    /// Id of the updating user
    #[serde(default)]
    pub updated_by: i32,
}

impl Validate for UpdateDepartmentRequest {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.require_non_blank("deptName", &self.dept_name, "Department name cannot be empty.");
    }
}

impl From<UpdateDepartmentRequest> for DepartmentUpdate {
    fn from(request: UpdateDepartmentRequest) -> Self {
        DepartmentUpdate {
            name: request.dept_name,
            description: request.dept_description,
            updated_by: request.updated_by,
        }
    }
}

/// Update Department Handler
#[endpoint(
    tags("departments"),
    summary = "Update Department",
    responses(
        (status_code = StatusCode::OK, description = "Department updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Department not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "departments.update",
    skip(department, json, depot),
    fields(department_id = tracing::field::Empty, updated_by = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    department: PathParam<i64>,
    json: JsonBody<UpdateDepartmentRequest>,
    depot: &mut Depot,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let department = DepartmentId::from_i64(department.into_inner());
    let request = json.into_inner().validated()?;

    let span = tracing::Span::current();

    span.record("department_id", tracing::field::display(department));
    span.record("updated_by", request.updated_by);

    let updated = state
        .app
        .departments
        .update_department(department, request.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(department_id = %department, "updated department");

    Ok(Json(updated.into()))
}
