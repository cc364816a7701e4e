//! Employees Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    departments::{records::DepartmentId, repository::read_department},
    employees::records::{AddressId, EmployeeId, EmployeeRecord},
    status::try_get_status,
};

use super::addresses::read_address;

const LIST_EMPLOYEES_SQL: &str = include_str!("../sql/list_employees.sql");
const FIND_EMPLOYEE_SQL: &str = include_str!("../sql/find_employee.sql");
const CREATE_EMPLOYEE_SQL: &str = include_str!("../sql/create_employee.sql");
const UPDATE_EMPLOYEE_SQL: &str = include_str!("../sql/update_employee.sql");
const DELETE_EMPLOYEE_SQL: &str = include_str!("../sql/delete_employee.sql");

/// Row values written by create and update.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmployeeColumns<'a> {
    pub(crate) name: &'a str,
    pub(crate) designation: Option<&'a str>,
    pub(crate) phone_number: Option<&'a str>,
    pub(crate) department: DepartmentId,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgEmployeesRepository;

impl PgEmployeesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Live employees only, ordered by id.
    pub(crate) async fn list_employees(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<EmployeeRecord>, sqlx::Error> {
        query_as::<Postgres, EmployeeRecord>(LIST_EMPLOYEES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Any employee with the given id, regardless of status.
    pub(crate) async fn find_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<Option<EmployeeRecord>, sqlx::Error> {
        query_as::<Postgres, EmployeeRecord>(FIND_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeColumns<'_>,
        address: AddressId,
    ) -> Result<EmployeeId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_EMPLOYEE_SQL)
            .bind(employee.name)
            .bind(employee.designation)
            .bind(employee.phone_number)
            .bind(address.into_i64())
            .bind(employee.department.into_i64())
            .fetch_one(&mut **tx)
            .await?;

        Ok(EmployeeId::from_i64(id))
    }

    /// Returns the number of live employees updated.
    pub(crate) async fn update_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: EmployeeId,
        employee: EmployeeColumns<'_>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_EMPLOYEE_SQL)
            .bind(id.into_i64())
            .bind(employee.name)
            .bind(employee.designation)
            .bind(employee.phone_number)
            .bind(employee.department.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Soft-deletes the employee, returning its owned address id.
    ///
    /// Returns `None` when the employee is missing or already deleted.
    pub(crate) async fn delete_employee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        employee: EmployeeId,
    ) -> Result<Option<AddressId>, sqlx::Error> {
        let address: Option<i64> = query_scalar(DELETE_EMPLOYEE_SQL)
            .bind(employee.into_i64())
            .fetch_optional(&mut **tx)
            .await?;

        Ok(address.map(AddressId::from_i64))
    }
}

impl<'r> FromRow<'r, PgRow> for EmployeeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        // LEFT JOIN: department columns are all NULL when none is assigned
        let department = row
            .try_get::<Option<i64>, _>("department_id")?
            .map(|_| read_department(row, "department_"))
            .transpose()?;

        Ok(Self {
            id: EmployeeId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            designation: row.try_get("designation")?,
            phone_number: row.try_get("phone_number")?,
            status: try_get_status(row, "status")?,
            address: read_address(row, "address_")?,
            department,
        })
    }
}
