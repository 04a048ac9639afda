use anyhow::Result;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_appender::rolling;

use salarybook::config::Config;
use salarybook::model::NewEmployee;
use salarybook::report::{SalaryStatistics, render_summary_table};
use salarybook::seed::load_sample_data;
use salarybook::store::EmployeeStore;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!("Salary system starting...");

    let mut store = EmployeeStore::new();

    if config.load_sample_data {
        load_sample_data(&mut store)?;
    }

    let summaries = store.summarize_all();

    println!("{}", "=".repeat(80));
    println!("EMPLOYEE SALARY SUMMARY");
    println!("{}", "=".repeat(80));
    print!("{}", render_summary_table(&summaries));
    println!("{}", "=".repeat(80));

    let stats = SalaryStatistics::from_summaries(&summaries);
    println!("\nSALARY STATISTICS:");
    println!("Total Employees: {}", stats.employee_count);
    println!("Total Basic Salary: ${}", stats.total_basic_salary);
    println!("Total Bonus: ${}", stats.total_bonus);
    println!("Total Tax: ${}", stats.total_tax);
    println!("Total Net Salary: ${}", stats.total_net_salary);
    println!("Average Net Salary: ${}", stats.average_net_salary);
    println!("{}", "=".repeat(80));

    let new_hire = store.create(NewEmployee::with_rates(
        "Alex Johnson",
        dec!(62000.00),
        dec!(14.00),
        dec!(19.00),
    ))?;
    let slip = store.summarize(new_hire.employee_id)?;
    info!(
        employee_id = new_hire.employee_id,
        net_salary = %slip.net_salary,
        "added new employee"
    );
    println!(
        "\nAdded employee {} ({}), net salary ${}",
        new_hire.employee_id, new_hire.name, slip.net_salary
    );

    Ok(())
}
