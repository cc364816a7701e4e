//! Create Employee Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use personnel_app::domain::{
    departments::records::DepartmentId,
    employees::data::{EmployeeUpdate, NewAddress, NewEmployee},
};

use crate::{
    employees::into_api_error,
    errors::ApiError,
    extensions::*,
    state::State,
    validation::{FieldErrors, Validate},
};

/// Employee Request
///
/// Body of both create and update. The department comes from the path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeRequest {
    #[serde(default)]
    pub employee_name: String,

    #[serde(default)]
    pub employee_designation: Option<String>,

    /// Exactly ten digits when present
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Street address
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default)]
    pub pincode: Option<String>,
}

impl EmployeeRequest {
    fn split(self) -> (String, Option<String>, Option<String>, NewAddress) {
        (
            self.employee_name,
            self.employee_designation,
            self.phone_number,
            NewAddress {
                street: self.address,
                city: self.city,
                state: self.state,
                postal_code: self.pincode,
            },
        )
    }
}

impl Validate for EmployeeRequest {
    fn collect_errors(&self, errors: &mut FieldErrors) {
        errors.require_non_blank(
            "employeeName",
            &self.employee_name,
            "Employee name should not be empty.",
        );
        errors.check_phone_number("phoneNumber", self.phone_number.as_deref());
    }
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(request: EmployeeRequest) -> Self {
        let (name, designation, phone_number, address) = request.split();

        NewEmployee {
            name,
            designation,
            phone_number,
            address,
        }
    }
}

impl From<EmployeeRequest> for EmployeeUpdate {
    fn from(request: EmployeeRequest) -> Self {
        let (name, designation, phone_number, address) = request.split();

        EmployeeUpdate {
            name,
            designation,
            phone_number,
            address,
        }
    }
}

/// Employee Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmployeeCreatedResponse {
    /// Assigned employee id
    pub employee_id: i64,
}

/// Create Employee Handler
///
/// Creates the employee and its address under a live department.
#[endpoint(
    tags("employees"),
    summary = "Create Employee",
    responses(
        (status_code = StatusCode::CREATED, description = "Employee created"),
        (status_code = StatusCode::NOT_FOUND, description = "Department not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    department: PathParam<i64>,
    json: JsonBody<EmployeeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EmployeeCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let department = DepartmentId::from_i64(department.into_inner());
    let request = json.into_inner().validated()?;

    let employee_id = state
        .app
        .employees
        .create_employee(department, request.into())
        .await
        .map_err(into_api_error)?
        .id
        .into_i64();

    res.add_header(LOCATION, format!("/employees/{employee_id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(EmployeeCreatedResponse { employee_id }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use personnel_app::domain::employees::{EmployeesServiceError, MockEmployeesService};

    use crate::{
        errors::ErrorResponse,
        test_helpers::{employees_service, make_department, make_employee},
    };

    use super::*;

    fn make_service(repo: MockEmployeesService) -> Service {
        employees_service(
            repo,
            Router::with_path("departments/{department}/employees").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_employee_success() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_create_employee()
            .once()
            .withf(|department, new| {
                *department == DepartmentId::from_i64(2)
                    && *new
                        == NewEmployee {
                            name: "Asha".to_string(),
                            designation: Some("Engineer".to_string()),
                            phone_number: Some("9876543210".to_string()),
                            address: NewAddress {
                                street: Some("1 Main St".to_string()),
                                city: Some("Pune".to_string()),
                                state: Some("MH".to_string()),
                                postal_code: Some("411001".to_string()),
                            },
                        }
            })
            .return_once(|_, _| Ok(make_employee(21, Some(make_department(2)))));

        let mut res = TestClient::post("http://example.com/departments/2/employees")
            .json(&json!({
                "employeeName": "Asha",
                "employeeDesignation": "Engineer",
                "phoneNumber": "9876543210",
                "address": "1 Main St",
                "city": "Pune",
                "state": "MH",
                "pincode": "411001"
            }))
            .send(&make_service(repo))
            .await;

        let body: EmployeeCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/employees/21"));
        assert_eq!(body.employee_id, 21);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_employee_invalid_fields_returns_field_errors() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_create_employee().never();

        let mut res = TestClient::post("http://example.com/departments/2/employees")
            .json(&json!({ "employeeName": "", "phoneNumber": "12345" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;
        let field_errors = body.field_errors.unwrap_or_default();

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Bad Request");
        assert_eq!(
            field_errors.get("employeeName").map(String::as_str),
            Some("Employee name should not be empty.")
        );
        assert_eq!(
            field_errors.get("phoneNumber").map(String::as_str),
            Some("Number should contain 10 digits.")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_employee_non_numeric_department_returns_error_response() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_create_employee().never();

        let mut res = TestClient::post("http://example.com/departments/abc/employees")
            .add_header("accept", "application/json", true)
            .json(&json!({ "employeeName": "Asha" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Bad Request");
        assert!(body.field_errors.is_none(), "no field errors expected");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_employee_ignores_status_flags_in_body() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_create_employee()
            .once()
            .withf(|department, new| {
                *department == DepartmentId::from_i64(2)
                    && new.name == "Asha"
                    && new.phone_number.is_none()
            })
            .return_once(|_, _| Ok(make_employee(8, Some(make_department(2)))));

        let res = TestClient::post("http://example.com/departments/2/employees")
            .json(&json!({
                "employeeName": "Asha",
                "active": false,
                "deleted": true
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_employee_unknown_department_returns_404() -> TestResult {
        let mut repo = MockEmployeesService::new();

        repo.expect_create_employee()
            .once()
            .return_once(|department, _| Err(EmployeesServiceError::DepartmentNotFound(department)));

        let mut res = TestClient::post("http://example.com/departments/77/employees")
            .json(&json!({ "employeeName": "Asha" }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Department not found with deptId : 77");

        Ok(())
    }
}
