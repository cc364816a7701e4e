//! Delete Department Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use personnel_app::domain::departments::records::DepartmentId;

use crate::{
    departments::{get::DepartmentResponse, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Delete Department Handler
///
/// Soft-deletes the department and returns its final state. Employees keep
/// their reference to it.
#[endpoint(
    tags("departments"),
    summary = "Delete Department",
    responses(
        (status_code = StatusCode::OK, description = "Department deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Department not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    department: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state
        .app
        .departments
        .delete_department(DepartmentId::from_i64(department.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(deleted.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use personnel_app::domain::{
        departments::{DepartmentsServiceError, MockDepartmentsService},
        status::RecordStatus,
    };

    use crate::test_helpers::{departments_service, make_department};

    use super::*;

    fn make_service(repo: MockDepartmentsService) -> Service {
        departments_service(
            repo,
            Router::with_path("departments/{department}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_department_returns_deleted_shape() -> TestResult {
        let mut repo = MockDepartmentsService::new();

        repo.expect_delete_department()
            .once()
            .withf(|id| *id == DepartmentId::from_i64(6))
            .return_once(|_| {
                let mut department = make_department(6);

                department.status = RecordStatus::Deleted;

                Ok(department)
            });

        let mut res = TestClient::delete("http://example.com/departments/6")
            .send(&make_service(repo))
            .await;

        let body: DepartmentResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.deleted);
        assert!(!body.active);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_department_returns_404() -> TestResult {
        let mut repo = MockDepartmentsService::new();

        repo.expect_delete_department()
            .once()
            .return_once(|id| Err(DepartmentsServiceError::NotFound(id)));

        let res = TestClient::delete("http://example.com/departments/6")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
