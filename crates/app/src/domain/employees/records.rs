//! Employee Records

use crate::{
    domain::{departments::records::DepartmentRecord, status::RecordStatus},
    ids::TypedId,
};

/// Employee Id
pub type EmployeeId = TypedId<EmployeeRecord>;

/// Address Id
pub type AddressId = TypedId<AddressRecord>;

/// Employee Record
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub designation: Option<String>,
    pub phone_number: Option<String>,
    pub status: RecordStatus,

    /// Owned address; shares the employee's lifecycle.
    pub address: AddressRecord,

    /// Referenced department, `None` until one is assigned.
    pub department: Option<DepartmentRecord>,
}

impl EmployeeRecord {
    /// Whether read operations may return this employee.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }
}

/// Address Record
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: AddressId,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub status: RecordStatus,
}
