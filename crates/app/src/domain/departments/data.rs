//! Department Data

/// New Department Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    /// Department name; must not be blank.
    pub name: String,

    pub description: Option<String>,

    /// Id of the user creating the department. Also recorded as the first updater.
    pub created_by: i32,
}

/// Department Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentUpdate {
    pub name: String,
    pub description: Option<String>,
    pub updated_by: i32,
}
