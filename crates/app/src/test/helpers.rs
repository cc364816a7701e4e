//! Test Helpers

use crate::{
    domain::{
        departments::{
            DepartmentsService, DepartmentsServiceError,
            data::NewDepartment,
            records::{DepartmentId, DepartmentRecord},
        },
        employees::{
            EmployeesService, EmployeesServiceError,
            data::{NewAddress, NewEmployee},
            records::{EmployeeId, EmployeeRecord},
        },
        status::RecordStatus,
    },
    test::TestContext,
};

pub(crate) async fn create_department(
    ctx: &TestContext,
    name: &str,
) -> Result<DepartmentRecord, DepartmentsServiceError> {
    ctx.departments
        .create_department(NewDepartment {
            name: name.to_string(),
            description: None,
            created_by: 1,
        })
        .await
}

pub(crate) fn new_employee(name: &str) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        designation: None,
        phone_number: Some("9876543210".to_string()),
        address: NewAddress {
            city: Some("Pune".to_string()),
            ..NewAddress::default()
        },
    }
}

pub(crate) async fn create_employee(
    ctx: &TestContext,
    department: DepartmentId,
    name: &str,
) -> Result<EmployeeRecord, EmployeesServiceError> {
    ctx.employees
        .create_employee(department, new_employee(name))
        .await
}

/// Disable a department without deleting it.
pub(crate) async fn deactivate_department(
    ctx: &TestContext,
    department: DepartmentId,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE departments SET status = $2 WHERE id = $1")
        .bind(department.into_i64())
        .bind(RecordStatus::Inactive.as_str())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}

/// Disable an employee without deleting it.
pub(crate) async fn deactivate_employee(
    ctx: &TestContext,
    employee: EmployeeId,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE employees SET status = $2 WHERE id = $1")
        .bind(employee.into_i64())
        .bind(RecordStatus::Inactive.as_str())
        .execute(ctx.db.pool())
        .await?;

    Ok(())
}
