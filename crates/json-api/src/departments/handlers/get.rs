//! Get Department Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use personnel_app::domain::departments::records::{DepartmentId, DepartmentRecord};

use crate::{departments::into_api_error, errors::ApiError, extensions::*, state::State};

/// Department Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DepartmentResponse {
    pub dept_id: i64,
    pub dept_name: String,
    pub dept_description: Option<String>,
    pub created_by: i32,
    pub updated_by: i32,

    /// RFC 3339 creation time
    pub created_on: String,

    /// RFC 3339 time of the last write
    pub updated_on: String,

    pub active: bool,
    pub deleted: bool,
}

impl From<DepartmentRecord> for DepartmentResponse {
    fn from(department: DepartmentRecord) -> Self {
        Self {
            dept_id: department.id.into_i64(),
            active: department.status.is_live(),
            deleted: department.status.is_deleted(),
            dept_name: department.name,
            dept_description: department.description,
            created_by: department.created_by,
            updated_by: department.updated_by,
            created_on: department.created_at.to_string(),
            updated_on: department.updated_at.to_string(),
        }
    }
}

/// Get Department Handler
#[endpoint(
    tags("departments"),
    summary = "Get Department",
    responses(
        (status_code = StatusCode::OK, description = "Department found"),
        (status_code = StatusCode::NOT_FOUND, description = "Department not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    department: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let department = DepartmentId::from_i64(department.into_inner());

    let department = state
        .app
        .departments
        .get_department(department)
        .await
        .map_err(into_api_error)?;

    Ok(Json(department.into()))
}
