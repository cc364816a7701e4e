//! App Router

use salvo::Router;

use crate::{departments, employees};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("departments")
                .get(departments::index::handler)
                .post(departments::create::handler)
                .push(
                    Router::with_path("{department}")
                        .get(departments::get::handler)
                        .put(departments::update::handler)
                        .delete(departments::delete::handler)
                        .push(
                            Router::with_path("employees")
                                .post(employees::create::handler)
                                .push(
                                    Router::with_path("{employee}").put(employees::update::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("employees")
                .get(employees::index::handler)
                .push(
                    Router::with_path("{employee}")
                        .get(employees::get::handler)
                        .delete(employees::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use personnel_app::domain::{
        departments::{MockDepartmentsService, records::DepartmentId},
        employees::{MockEmployeesService, records::EmployeeId},
    };

    use crate::test_helpers::{app_service, make_department, make_employee};

    use super::*;

    #[tokio::test]
    async fn nested_employee_routes_reach_employee_handlers() -> TestResult {
        let mut departments = MockDepartmentsService::new();
        let mut employees = MockEmployeesService::new();

        departments.expect_get_department().never();

        employees
            .expect_create_employee()
            .once()
            .withf(|department, _| *department == DepartmentId::from_i64(2))
            .return_once(|_, _| Ok(make_employee(10, Some(make_department(2)))));

        employees
            .expect_update_employee()
            .once()
            .withf(|department, employee, _| {
                *department == DepartmentId::from_i64(2) && *employee == EmployeeId::from_i64(10)
            })
            .return_once(|_, _, _| Ok(make_employee(10, Some(make_department(2)))));

        let service = app_service(departments, employees, app_router());

        let created = TestClient::post("http://example.com/departments/2/employees")
            .json(&json!({ "employeeName": "Asha" }))
            .send(&service)
            .await;

        let updated = TestClient::put("http://example.com/departments/2/employees/10")
            .json(&json!({ "employeeName": "Asha" }))
            .send(&service)
            .await;

        assert_eq!(created.status_code, Some(StatusCode::CREATED));
        assert_eq!(updated.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn department_routes_reach_department_handlers() -> TestResult {
        let mut departments = MockDepartmentsService::new();
        let mut employees = MockEmployeesService::new();

        departments
            .expect_get_department()
            .once()
            .return_once(|_| Ok(make_department(2)));

        employees.expect_get_employee().never();

        let mut res = TestClient::get("http://example.com/departments/2")
            .send(&app_service(departments, employees, app_router()))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["deptId"], 2);

        Ok(())
    }
}
