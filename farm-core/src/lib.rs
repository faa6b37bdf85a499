pub mod calculations;
pub mod models;

pub use calculations::{BudgetCalculator, BudgetConfig, BudgetError};
pub use models::*;
