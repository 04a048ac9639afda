//! The ten sample employee rows shipped with the original data set.

use rust_decimal_macros::dec;
use tracing::info;

use crate::error::Result;
use crate::model::{Employee, NewEmployee};
use crate::store::EmployeeStore;

pub fn sample_employees() -> Vec<NewEmployee> {
    vec![
        NewEmployee::with_rates("John Smith", dec!(50000.00), dec!(10.00), dec!(15.00)),
        NewEmployee::with_rates("Sarah Johnson", dec!(70000.00), dec!(20.00), dec!(22.00)),
        NewEmployee::with_rates("Michael Brown", dec!(45000.00), dec!(8.00), dec!(12.00)),
        NewEmployee::with_rates("Emily Davis", dec!(82000.00), dec!(15.00), dec!(20.00)),
        NewEmployee::with_rates("David Wilson", dec!(38000.00), dec!(5.00), dec!(10.00)),
        NewEmployee::with_rates("Jessica Garcia", dec!(61000.00), dec!(12.00), dec!(18.00)),
        NewEmployee::with_rates("Daniel Martinez", dec!(55000.00), dec!(10.00), dec!(16.00)),
        NewEmployee::with_rates("Laura Anderson", dec!(93000.00), dec!(18.00), dec!(25.00)),
        NewEmployee::with_rates("James Taylor", dec!(47000.00), dec!(7.50), dec!(12.50)),
        NewEmployee::with_rates("Maria Thomas", dec!(66000.00), dec!(14.00), dec!(19.00)),
    ]
}

/// Insert the sample rows into `store` and return the created records.
pub fn load_sample_data(store: &mut EmployeeStore) -> Result<Vec<Employee>> {
    let rows = sample_employees();
    let mut created = Vec::with_capacity(rows.len());
    for row in rows {
        created.push(store.create(row)?);
    }
    info!(count = created.len(), "loaded sample employee data");
    Ok(created)
}
