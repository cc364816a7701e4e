//! Department Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    departments::{get::DepartmentResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Department Index Handler
///
/// Returns every live department ordered by id.
#[endpoint(
    tags("departments"),
    summary = "List Departments",
    responses(
        (status_code = StatusCode::OK, description = "Departments found"),
        (status_code = StatusCode::NOT_FOUND, description = "No department found"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let departments = state
        .app
        .departments
        .list_departments()
        .await
        .map_err(into_api_error)?;

    Ok(Json(departments.into_iter().map(Into::into).collect()))
}
