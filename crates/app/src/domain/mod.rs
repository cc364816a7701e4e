//! Personnel Domain Concerns

pub mod departments;
pub mod employees;
pub mod status;
