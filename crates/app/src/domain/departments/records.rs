//! Department Records

use jiff::Timestamp;

use crate::{domain::status::RecordStatus, ids::TypedId};

/// Department Id
pub type DepartmentId = TypedId<DepartmentRecord>;

/// Department Record
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRecord {
    pub id: DepartmentId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: i32,
    pub updated_by: i32,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DepartmentRecord {
    /// Whether read operations may return this department.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }
}
