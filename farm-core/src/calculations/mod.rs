//! Budget calculation for farm financial planning.
//!
//! This module maps a farm input record to an income/expense/profit summary,
//! together with the cost breakdown used for proportional display.

pub mod budget;
pub mod common;

pub use budget::{BudgetCalculator, BudgetConfig, BudgetError};
