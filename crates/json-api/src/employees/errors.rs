//! Errors

use tracing::error;

use personnel_app::domain::employees::EmployeesServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: EmployeesServiceError) -> ApiError {
    match error {
        EmployeesServiceError::EmployeeNotFound(_)
        | EmployeesServiceError::DepartmentNotFound(_)
        | EmployeesServiceError::NoDataFound => ApiError::not_found(error.to_string()),
        EmployeesServiceError::AlreadyExists
        | EmployeesServiceError::InvalidReference
        | EmployeesServiceError::MissingRequiredData
        | EmployeesServiceError::InvalidData => ApiError::bad_request("Invalid employee payload"),
        EmployeesServiceError::Sql(source) => {
            error!("employee storage failure: {source}");

            ApiError::internal_server_error()
        }
    }
}
