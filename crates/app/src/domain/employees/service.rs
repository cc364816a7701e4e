//! Employees service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        departments::{
            records::{DepartmentId, DepartmentRecord},
            repository::PgDepartmentsRepository,
        },
        employees::{
            data::{EmployeeUpdate, NewEmployee},
            errors::EmployeesServiceError,
            records::{EmployeeId, EmployeeRecord},
            repositories::{EmployeeColumns, PgAddressesRepository, PgEmployeesRepository},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgEmployeesService {
    db: Db,
    employees: PgEmployeesRepository,
    addresses: PgAddressesRepository,
    departments: PgDepartmentsRepository,
}

impl PgEmployeesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            employees: PgEmployeesRepository::new(),
            addresses: PgAddressesRepository::new(),
            departments: PgDepartmentsRepository::new(),
        }
    }

    /// Fails unless the department exists and is active.
    async fn require_live_department(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, EmployeesServiceError> {
        self.departments
            .find_department(tx, department)
            .await?
            .filter(DepartmentRecord::is_live)
            .ok_or(EmployeesServiceError::DepartmentNotFound(department))
    }

    async fn require_live_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        self.employees
            .find_employee(tx, employee)
            .await?
            .filter(EmployeeRecord::is_live)
            .ok_or(EmployeesServiceError::EmployeeNotFound(employee))
    }

    async fn fetch_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        self.employees
            .find_employee(tx, employee)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound(employee))
    }
}

#[async_trait]
impl EmployeesService for PgEmployeesService {
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let employees = self.employees.list_employees(&mut tx).await?;

        tx.commit().await?;

        if employees.is_empty() {
            return Err(EmployeesServiceError::NoDataFound);
        }

        debug!(count = employees.len(), "fetched employees");

        Ok(employees)
    }

    async fn get_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let found = self.require_live_employee(&mut tx, employee).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn create_employee(
        &self,
        department: DepartmentId,
        employee: NewEmployee,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.require_live_department(&mut tx, department).await?;

        let address = self
            .addresses
            .create_address(&mut tx, &employee.address)
            .await?;

        let id = self
            .employees
            .create_employee(
                &mut tx,
                EmployeeColumns {
                    name: &employee.name,
                    designation: employee.designation.as_deref(),
                    phone_number: employee.phone_number.as_deref(),
                    department,
                },
                address.id,
            )
            .await?;

        let created = self.fetch_employee(&mut tx, id).await?;

        tx.commit().await?;

        info!(employee_id = %id, department_id = %department, "created employee");

        Ok(created)
    }

    async fn update_employee(
        &self,
        department: DepartmentId,
        employee: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let existing = self.require_live_employee(&mut tx, employee).await?;

        self.require_live_department(&mut tx, department).await?;

        self.addresses
            .update_address(&mut tx, existing.address.id, &update.address)
            .await?;

        let rows_affected = self
            .employees
            .update_employee(
                &mut tx,
                employee,
                EmployeeColumns {
                    name: &update.name,
                    designation: update.designation.as_deref(),
                    phone_number: update.phone_number.as_deref(),
                    department,
                },
            )
            .await?;

        if rows_affected == 0 {
            return Err(EmployeesServiceError::EmployeeNotFound(employee));
        }

        let updated = self.fetch_employee(&mut tx, employee).await?;

        tx.commit().await?;

        info!(employee_id = %employee, department_id = %department, "updated employee");

        Ok(updated)
    }

    async fn delete_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let address = self
            .employees
            .delete_employee(&mut tx, employee)
            .await?
            .ok_or(EmployeesServiceError::EmployeeNotFound(employee))?;

        self.addresses.delete_address(&mut tx, address).await?;

        let deleted = self.fetch_employee(&mut tx, employee).await?;

        tx.commit().await?;

        info!(employee_id = %employee, "deleted employee");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait EmployeesService: Send + Sync {
    /// Retrieves all live employees with their address and department.
    ///
    /// Fails with [`EmployeesServiceError::NoDataFound`] when there are none.
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, EmployeesServiceError>;

    /// Retrieve a single live employee.
    async fn get_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Creates an employee and its address under a live department.
    async fn create_employee(
        &self,
        department: DepartmentId,
        employee: NewEmployee,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Overwrites a live employee and its address, moving it to `department`.
    async fn update_employee(
        &self,
        department: DepartmentId,
        employee: EmployeeId,
        update: EmployeeUpdate,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;

    /// Soft-deletes an employee and its address, returning the final state.
    async fn delete_employee(
        &self,
        employee: EmployeeId,
    ) -> Result<EmployeeRecord, EmployeesServiceError>;
}
