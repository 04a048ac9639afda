pub mod employee;
pub mod summary;

pub use employee::{Employee, NewEmployee, UpdateEmployee};
pub use summary::SalarySummary;
