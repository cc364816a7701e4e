//! Departments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::departments::{
        data::{DepartmentUpdate, NewDepartment},
        errors::DepartmentsServiceError,
        records::{DepartmentId, DepartmentRecord},
        repository::PgDepartmentsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgDepartmentsService {
    db: Db,
    repository: PgDepartmentsRepository,
}

impl PgDepartmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDepartmentsRepository::new(),
        }
    }
}

#[async_trait]
impl DepartmentsService for PgDepartmentsService {
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let departments = self.repository.list_departments(&mut tx).await?;

        tx.commit().await?;

        if departments.is_empty() {
            return Err(DepartmentsServiceError::NoDataFound);
        }

        debug!(count = departments.len(), "fetched departments");

        Ok(departments)
    }

    async fn get_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let found = self
            .repository
            .find_department(&mut tx, department)
            .await?
            .filter(DepartmentRecord::is_live);

        tx.commit().await?;

        found.ok_or(DepartmentsServiceError::NotFound(department))
    }

    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_department(&mut tx, &department)
            .await?;

        tx.commit().await?;

        info!(department_id = %created.id, "created department");

        Ok(created)
    }

    async fn update_department(
        &self,
        department: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_department(&mut tx, department, &update)
            .await?
            .ok_or(DepartmentsServiceError::NotFound(department))?;

        tx.commit().await?;

        info!(department_id = %department, "updated department");

        Ok(updated)
    }

    async fn delete_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let deleted = self
            .repository
            .delete_department(&mut tx, department)
            .await?
            .ok_or(DepartmentsServiceError::NotFound(department))?;

        tx.commit().await?;

        info!(department_id = %department, "deleted department");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait DepartmentsService: Send + Sync {
    /// Retrieves all live departments.
    ///
    /// Fails with [`DepartmentsServiceError::NoDataFound`] when there are none.
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DepartmentsServiceError>;

    /// Retrieve a single live department.
    async fn get_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Creates a new active department.
    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Overwrites the mutable fields of a live department.
    async fn update_department(
        &self,
        department: DepartmentId,
        update: DepartmentUpdate,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;

    /// Soft-deletes a department, returning its final state.
    async fn delete_department(
        &self,
        department: DepartmentId,
    ) -> Result<DepartmentRecord, DepartmentsServiceError>;
}
