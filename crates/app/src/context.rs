//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        departments::{DepartmentsService, PgDepartmentsService},
        employees::{EmployeesService, PgEmployeesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub departments: Arc<dyn DepartmentsService>,
    pub employees: Arc<dyn EmployeesService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            departments: Arc::new(PgDepartmentsService::new(db.clone())),
            employees: Arc::new(PgEmployeesService::new(db)),
        })
    }
}
