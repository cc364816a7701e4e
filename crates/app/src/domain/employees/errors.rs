//! Employees service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{departments::records::DepartmentId, employees::records::EmployeeId};

#[derive(Debug, Error)]
pub enum EmployeesServiceError {
    #[error("Employee not found with id : {0}")]
    EmployeeNotFound(EmployeeId),

    #[error("Department not found with deptId : {0}")]
    DepartmentNotFound(DepartmentId),

    #[error("There is no data in the employee table")]
    NoDataFound,

    #[error("employee already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for EmployeesServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
