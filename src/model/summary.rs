use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::model::Employee;

/// Round to 2 decimal places, half away from zero (MySQL `ROUND()` behavior).
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Read-only salary projection for one employee. Never stored; computed on
/// read from the employee's basic salary and rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalarySummary {
    pub employee_id: u64,
    pub name: String,
    pub basic_salary: Decimal,
    pub bonus_percentage: Decimal,
    pub tax_percentage: Decimal,
    pub calculated_bonus: Decimal,
    pub calculated_tax: Decimal,
    pub net_salary: Decimal,
}

impl SalarySummary {
    /// Derive the bonus, tax, and net figures.
    ///
    /// Bonus and tax are each rounded to 2 places before the net figure is
    /// formed. Rounding after summation can produce a different cent, so the
    /// order here must not change.
    pub fn for_employee(employee: &Employee) -> Self {
        let calculated_bonus =
            round2(employee.basic_salary * employee.bonus_percentage / Decimal::ONE_HUNDRED);
        let calculated_tax =
            round2(employee.basic_salary * employee.tax_percentage / Decimal::ONE_HUNDRED);
        let net_salary = round2(employee.basic_salary + calculated_bonus - calculated_tax);

        Self {
            employee_id: employee.employee_id,
            name: employee.name.clone(),
            basic_salary: employee.basic_salary,
            bonus_percentage: employee.bonus_percentage,
            tax_percentage: employee.tax_percentage,
            calculated_bonus,
            calculated_tax,
            net_salary,
        }
    }
}
