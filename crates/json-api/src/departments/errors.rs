//! Errors

use tracing::error;

use personnel_app::domain::departments::DepartmentsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: DepartmentsServiceError) -> ApiError {
    match error {
        DepartmentsServiceError::NotFound(_) | DepartmentsServiceError::NoDataFound => {
            ApiError::not_found(error.to_string())
        }
        DepartmentsServiceError::MissingRequiredData | DepartmentsServiceError::InvalidData => {
            ApiError::bad_request("Invalid department payload")
        }
        DepartmentsServiceError::Sql(source) => {
            error!("department storage failure: {source}");

            ApiError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use personnel_app::domain::departments::records::DepartmentId;

    use super::*;

    #[test]
    fn not_found_keeps_service_message() {
        let error = into_api_error(DepartmentsServiceError::NotFound(DepartmentId::from_i64(5)));

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Department not found with deptId : 5");
    }

    #[test]
    fn constraint_violation_is_bad_request() {
        let error = into_api_error(DepartmentsServiceError::InvalidData);

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    }
}
