//! Employees

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::EmployeesServiceError;
pub use service::*;
