//! Employee Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    employees::{get::EmployeeResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Employee Index Handler
///
/// Returns every live employee ordered by id.
#[endpoint(
    tags("employees"),
    summary = "List Employees",
    responses(
        (status_code = StatusCode::OK, description = "Employees found"),
        (status_code = StatusCode::NOT_FOUND, description = "No employee found"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let employees = state
        .app
        .employees
        .list_employees()
        .await
        .map_err(into_api_error)?;

    tracing::debug!(count = employees.len(), "listed employees");

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use personnel_app::domain::employees::{EmployeesServiceError, MockEmployeesService};

    use crate::test_helpers::{employees_service, make_employee};

    use super::*;

    fn make_service(repo: MockEmployeesService) -> Service {
        employees_service(repo, Router::with_path("employees").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_bare_array() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_list_employees()
            .once()
            .return_once(|| Ok(vec![make_employee(1, None), make_employee(2, None)]));

        let mut res = TestClient::get("http://example.com/employees")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[1]["employeeId"], 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_employees_returns_404() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_list_employees()
            .once()
            .return_once(|| Err(EmployeesServiceError::NoDataFound));

        let res = TestClient::get("http://example.com/employees")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
