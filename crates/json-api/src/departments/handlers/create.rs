//! Create Department Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use personnel_app::domain::departments::data::NewDepartment;

use crate::{
    departments::into_api_error,
    errors::ApiError,
    extensions::*,
    state::State,
    validation::{FieldErrors, Validate},
};

/// Create Department Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDepartmentRequest {
    #[serde(default)]
    pub dept_name: String,

    #[serde(default)]
    pub dept_description: Option<String>,

    /// Id of the creating user
    #[serde(default)]
    pub created_by: i32,
}

impl Validate for CreateDepartmentRequest {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.require_non_blank("deptName", &self.dept_name, "Department name cannot be empty.");
    }
}

impl From<CreateDepartmentRequest> for NewDepartment {
    fn from(request: CreateDepartmentRequest) -> Self {
        NewDepartment {
            name: request.dept_name,
            description: request.dept_description,
            created_by: request.created_by,
        }
    }
}

/// Department Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DepartmentCreatedResponse {
    /// Assigned department id
    pub dept_id: i64,
}

/// Create Department Handler
#[endpoint(
    tags("departments"),
    summary = "Create Department",
    responses(
        (status_code = StatusCode::CREATED, description = "Department created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDepartmentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DepartmentCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner().validated()?;

    let dept_id = state
        .app
        .departments
        .create_department(request.into())
        .await
        .map_err(into_api_error)?
        .id
        .into_i64();

    res.add_header(LOCATION, format!("/departments/{dept_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(DepartmentCreatedResponse { dept_id }))
}
