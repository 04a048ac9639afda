//! Aggregate figures and plain-text rendering for salary summaries.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::SalarySummary;
use crate::model::summary::round2;

/// Totals and average over a set of salary summaries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryStatistics {
    pub employee_count: usize,
    pub total_basic_salary: Decimal,
    pub total_bonus: Decimal,
    pub total_tax: Decimal,
    pub total_net_salary: Decimal,
    /// Rounded to 2 places; zero when there are no employees.
    pub average_net_salary: Decimal,
}

impl SalaryStatistics {
    pub fn from_summaries(summaries: &[SalarySummary]) -> Self {
        let total_basic_salary: Decimal = summaries.iter().map(|s| s.basic_salary).sum();
        let total_bonus: Decimal = summaries.iter().map(|s| s.calculated_bonus).sum();
        let total_tax: Decimal = summaries.iter().map(|s| s.calculated_tax).sum();
        let total_net_salary: Decimal = summaries.iter().map(|s| s.net_salary).sum();

        let average_net_salary = if summaries.is_empty() {
            Decimal::ZERO
        } else {
            round2(total_net_salary / Decimal::from(summaries.len() as u64))
        };

        Self {
            employee_count: summaries.len(),
            total_basic_salary,
            total_bonus,
            total_tax,
            total_net_salary,
            average_net_salary,
        }
    }
}

/// Fixed-width text table of the salary projection columns.
pub fn render_summary_table(summaries: &[SalarySummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<24} {:>14} {:>8} {:>12} {:>8} {:>12} {:>14}",
        "ID", "Name", "Basic Salary", "Bonus %", "Bonus", "Tax %", "Tax", "Net Salary"
    );
    for s in summaries {
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:>14} {:>8} {:>12} {:>8} {:>12} {:>14}",
            s.employee_id,
            s.name,
            s.basic_salary,
            s.bonus_percentage,
            s.calculated_bonus,
            s.tax_percentage,
            s.calculated_tax,
            s.net_salary,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewEmployee;
    use crate::store::EmployeeStore;
    use rust_decimal_macros::dec;

    fn seeded_store() -> EmployeeStore {
        let mut store = EmployeeStore::new();
        store
            .create(NewEmployee::with_rates(
                "Ann",
                dec!(50000.00),
                dec!(10.00),
                dec!(15.00),
            ))
            .unwrap();
        store
            .create(NewEmployee::with_rates(
                "Bob",
                dec!(70000.00),
                dec!(20.00),
                dec!(22.00),
            ))
            .unwrap();
        store
    }

    #[test]
    fn statistics_total_and_average() {
        let stats = SalaryStatistics::from_summaries(&seeded_store().summarize_all());

        assert_eq!(stats.employee_count, 2);
        assert_eq!(stats.total_basic_salary, dec!(120000.00));
        assert_eq!(stats.total_bonus, dec!(19000.00));
        assert_eq!(stats.total_tax, dec!(22900.00));
        assert_eq!(stats.total_net_salary, dec!(116100.00));
        assert_eq!(stats.average_net_salary, dec!(58050.00));
    }

    #[test]
    fn statistics_over_empty_set() {
        let stats = SalaryStatistics::from_summaries(&[]);
        assert_eq!(stats.employee_count, 0);
        assert_eq!(stats.average_net_salary, dec!(0));
    }

    #[test]
    fn table_lists_every_employee() {
        let table = render_summary_table(&seeded_store().summarize_all());
        assert!(table.contains("Ann"));
        assert!(table.contains("Bob"));
        assert!(table.contains("47500.00"));
        assert!(table.contains("68600.00"));
    }
}
