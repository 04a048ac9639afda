use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Employee, NewEmployee, SalarySummary, UpdateEmployee};

/// In-memory employee record store.
///
/// Owns the records and the identifier sequence. Identifiers are assigned
/// monotonically by the store itself and are never reused, so iteration in
/// id order is iteration in insertion order. Mutating operations take
/// `&mut self`; callers that share a store across threads wrap it in a lock.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: BTreeMap<u64, Employee>,
    next_id: u64,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new employee record.
    ///
    /// Assigns the next identifier and stamps `created_at` and `updated_at`
    /// with the current time. Fails with [`Error::Validation`] if the name is
    /// empty or any money/rate figure is negative.
    pub fn create(&mut self, new: NewEmployee) -> Result<Employee> {
        validate_name(&new.name)?;
        validate_amount("basic_salary", new.basic_salary)?;
        validate_amount("bonus_percentage", new.bonus_percentage)?;
        validate_amount("tax_percentage", new.tax_percentage)?;

        self.next_id += 1;
        let now = Utc::now();
        let employee = Employee {
            employee_id: self.next_id,
            name: new.name,
            basic_salary: new.basic_salary,
            bonus_percentage: new.bonus_percentage,
            tax_percentage: new.tax_percentage,
            created_at: now,
            updated_at: now,
        };

        info!(employee_id = employee.employee_id, name = %employee.name, "created employee");
        self.employees.insert(employee.employee_id, employee.clone());
        Ok(employee)
    }

    pub fn get(&self, employee_id: u64) -> Result<&Employee> {
        debug!(employee_id, "fetching employee");
        self.employees
            .get(&employee_id)
            .ok_or(Error::NotFound(employee_id))
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// The changed record is revalidated under the same constraints as
    /// [`create`](Self::create) before anything is committed.
    pub fn update(&mut self, employee_id: u64, changes: UpdateEmployee) -> Result<Employee> {
        let current = self
            .employees
            .get(&employee_id)
            .ok_or(Error::NotFound(employee_id))?;

        let mut updated = current.clone();
        if let Some(name) = changes.name {
            updated.name = name;
        }
        if let Some(basic_salary) = changes.basic_salary {
            updated.basic_salary = basic_salary;
        }
        if let Some(bonus_percentage) = changes.bonus_percentage {
            updated.bonus_percentage = bonus_percentage;
        }
        if let Some(tax_percentage) = changes.tax_percentage {
            updated.tax_percentage = tax_percentage;
        }

        validate_name(&updated.name)?;
        validate_amount("basic_salary", updated.basic_salary)?;
        validate_amount("bonus_percentage", updated.bonus_percentage)?;
        validate_amount("tax_percentage", updated.tax_percentage)?;

        updated.updated_at = Utc::now();
        info!(employee_id, "updated employee");
        self.employees.insert(employee_id, updated.clone());
        Ok(updated)
    }

    /// Remove a record. A second delete of the same id fails with
    /// [`Error::NotFound`].
    pub fn delete(&mut self, employee_id: u64) -> Result<()> {
        self.employees
            .remove(&employee_id)
            .ok_or(Error::NotFound(employee_id))?;
        info!(employee_id, "deleted employee");
        Ok(())
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Salary projection for one employee.
    pub fn summarize(&self, employee_id: u64) -> Result<SalarySummary> {
        let employee = self.get(employee_id)?;
        Ok(SalarySummary::for_employee(employee))
    }

    /// Salary projections for every record, in insertion order.
    pub fn summarize_all(&self) -> Vec<SalarySummary> {
        self.employees
            .values()
            .map(SalarySummary::for_employee)
            .collect()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

fn validate_amount(field: &str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(Error::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}
