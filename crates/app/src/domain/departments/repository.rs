//! Departments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    departments::{
        data::{DepartmentUpdate, NewDepartment},
        records::{DepartmentId, DepartmentRecord},
    },
    status::try_get_status,
};

const LIST_DEPARTMENTS_SQL: &str = include_str!("sql/list_departments.sql");
const FIND_DEPARTMENT_SQL: &str = include_str!("sql/find_department.sql");
const CREATE_DEPARTMENT_SQL: &str = include_str!("sql/create_department.sql");
const UPDATE_DEPARTMENT_SQL: &str = include_str!("sql/update_department.sql");
const DELETE_DEPARTMENT_SQL: &str = include_str!("sql/delete_department.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDepartmentsRepository;

impl PgDepartmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Live departments only, ordered by id.
    pub(crate) async fn list_departments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(LIST_DEPARTMENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Any department with the given id, regardless of status.
    pub(crate) async fn find_department(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        department: DepartmentId,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(FIND_DEPARTMENT_SQL)
            .bind(department.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_department(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        department: &NewDepartment,
    ) -> Result<DepartmentRecord, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(CREATE_DEPARTMENT_SQL)
            .bind(&department.name)
            .bind(department.description.as_deref())
            .bind(department.created_by)
            .fetch_one(&mut **tx)
            .await
    }

    /// Returns `None` when no live department has the given id.
    pub(crate) async fn update_department(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        department: DepartmentId,
        update: &DepartmentUpdate,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(UPDATE_DEPARTMENT_SQL)
            .bind(department.into_i64())
            .bind(&update.name)
            .bind(update.description.as_deref())
            .bind(update.updated_by)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Returns `None` when the department is missing or already deleted.
    pub(crate) async fn delete_department(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        department: DepartmentId,
    ) -> Result<Option<DepartmentRecord>, sqlx::Error> {
        query_as::<Postgres, DepartmentRecord>(DELETE_DEPARTMENT_SQL)
            .bind(department.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }
}

/// Decode a department from columns sharing `prefix`, so joined queries can
/// alias department columns (e.g. `department_name`).
pub(crate) fn read_department(row: &PgRow, prefix: &str) -> sqlx::Result<DepartmentRecord> {
    let column = |name: &str| format!("{prefix}{name}");

    Ok(DepartmentRecord {
        id: DepartmentId::from_i64(row.try_get(column("id").as_str())?),
        name: row.try_get(column("name").as_str())?,
        description: row.try_get(column("description").as_str())?,
        created_by: row.try_get(column("created_by").as_str())?,
        updated_by: row.try_get(column("updated_by").as_str())?,
        status: try_get_status(row, &column("status"))?,
        created_at: row
            .try_get::<SqlxTimestamp, _>(column("created_at").as_str())?
            .to_jiff(),
        updated_at: row
            .try_get::<SqlxTimestamp, _>(column("updated_at").as_str())?
            .to_jiff(),
    })
}

impl<'r> FromRow<'r, PgRow> for DepartmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        read_department(row, "")
    }
}
