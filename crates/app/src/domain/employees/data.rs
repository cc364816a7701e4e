//! Employee Data

/// Address fields supplied on create and update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// New Employee Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub designation: Option<String>,

    /// Exactly ten digits when present.
    pub phone_number: Option<String>,

    pub address: NewAddress,
}

/// Employee Update Data
///
/// Replaces every mutable field, including the owned address.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub designation: Option<String>,
    pub phone_number: Option<String>,
    pub address: NewAddress,
}
