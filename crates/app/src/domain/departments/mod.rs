//! Departments

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::DepartmentsServiceError;
pub use service::*;
