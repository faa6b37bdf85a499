mod budget_summary;
mod farm_input;
mod farm_type;

pub use budget_summary::{BudgetSummary, CostCategory, CostSlice};
pub use farm_input::{CropPlan, FarmInput, FarmProduction, LivestockPlan};
pub use farm_type::{CropKind, FarmType, LivestockKind};
