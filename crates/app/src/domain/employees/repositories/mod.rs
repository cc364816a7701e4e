//! Employee Repositories

mod addresses;
mod employees;

pub(crate) use addresses::PgAddressesRepository;
pub(crate) use employees::{EmployeeColumns, PgEmployeesRepository};
