use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee record. Field names match the persisted column names, so a
/// serialized record is compatible with existing stored data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub employee_id: u64,

    pub name: String,

    /// Non-negative, 2 fractional digits (e.g. 50000.00).
    pub basic_salary: Decimal,

    /// Rate applied to `basic_salary` to derive the bonus amount.
    pub bonus_percentage: Decimal,

    /// Rate applied to `basic_salary` to derive the tax amount.
    pub tax_percentage: Decimal,

    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub basic_salary: Decimal,
    #[serde(default)]
    pub bonus_percentage: Decimal,
    #[serde(default)]
    pub tax_percentage: Decimal,
}

impl NewEmployee {
    /// New employee with both rates defaulted to 0.00.
    pub fn new(name: impl Into<String>, basic_salary: Decimal) -> Self {
        Self {
            name: name.into(),
            basic_salary,
            bonus_percentage: Decimal::ZERO,
            tax_percentage: Decimal::ZERO,
        }
    }

    pub fn with_rates(
        name: impl Into<String>,
        basic_salary: Decimal,
        bonus_percentage: Decimal,
        tax_percentage: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            basic_salary,
            bonus_percentage,
            tax_percentage,
        }
    }
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub basic_salary: Option<Decimal>,
    pub bonus_percentage: Option<Decimal>,
    pub tax_percentage: Option<Decimal>,
}
