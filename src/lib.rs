//! Employee salary record store.
//!
//! Holds employee identity plus three input figures (basic salary, bonus
//! percentage, tax percentage) and derives bonus amount, tax amount, and net
//! salary through a pure, stateless formula.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod seed;
pub mod store;

pub use error::{Error, Result};
pub use model::{Employee, NewEmployee, SalarySummary, UpdateEmployee};
pub use store::EmployeeStore;
