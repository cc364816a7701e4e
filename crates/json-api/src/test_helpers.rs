//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use personnel_app::{
    context::AppContext,
    domain::{
        departments::{
            MockDepartmentsService,
            records::{DepartmentId, DepartmentRecord},
        },
        employees::{
            MockEmployeesService,
            records::{AddressId, AddressRecord, EmployeeId, EmployeeRecord},
        },
        status::RecordStatus,
    },
};

use crate::{errors::catcher, state::State};

fn strict_departments_mock() -> MockDepartmentsService {
    let mut departments = MockDepartmentsService::new();

    departments.expect_list_departments().never();
    departments.expect_get_department().never();
    departments.expect_create_department().never();
    departments.expect_update_department().never();
    departments.expect_delete_department().never();

    departments
}

fn strict_employees_mock() -> MockEmployeesService {
    let mut employees = MockEmployeesService::new();

    employees.expect_list_employees().never();
    employees.expect_get_employee().never();
    employees.expect_create_employee().never();
    employees.expect_update_employee().never();
    employees.expect_delete_employee().never();

    employees
}

fn state(departments: MockDepartmentsService, employees: MockEmployeesService) -> Arc<State> {
    State::from_app_context(AppContext {
        departments: Arc::new(departments),
        employees: Arc::new(employees),
    })
}

pub(crate) fn departments_service(departments: MockDepartmentsService, route: Router) -> Service {
    app_service(departments, strict_employees_mock(), route)
}

pub(crate) fn employees_service(employees: MockEmployeesService, route: Router) -> Service {
    app_service(strict_departments_mock(), employees, route)
}

pub(crate) fn app_service(
    departments: MockDepartmentsService,
    employees: MockEmployeesService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(departments, employees)))
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn make_department(id: i64) -> DepartmentRecord {
    DepartmentRecord {
        id: DepartmentId::from_i64(id),
        name: "Engineering".to_string(),
        description: Some("Builds things".to_string()),
        created_by: 1,
        updated_by: 1,
        status: RecordStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_employee(id: i64, department: Option<DepartmentRecord>) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId::from_i64(id),
        name: "Asha".to_string(),
        designation: Some("Engineer".to_string()),
        phone_number: Some("9876543210".to_string()),
        status: RecordStatus::Active,
        address: AddressRecord {
            id: AddressId::from_i64(id),
            street: Some("1 Main St".to_string()),
            city: Some("Pune".to_string()),
            state: Some("MH".to_string()),
            postal_code: Some("411001".to_string()),
            status: RecordStatus::Active,
        },
        department,
    }
}
