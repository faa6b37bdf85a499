use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Breakdown buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Equipment,
    Rent,
    Salaries,
    SeedsFeed,
    FertilizersWater,
    Miscellaneous,
}

impl CostCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equipment => "Equipment",
            Self::Rent => "Rent",
            Self::Salaries => "Salaries",
            Self::SeedsFeed => "Seeds/Feed",
            Self::FertilizersWater => "Fertilizers/Water",
            Self::Miscellaneous => "Misc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSlice {
    pub category: CostCategory,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,

    /// May be negative (a loss).
    pub net_profit: Decimal,

    /// Contingency savings suggestion; zero unless `net_profit` is positive.
    pub suggested_reserve: Decimal,

    /// Six slices in fixed display order: Equipment, Rent, Salaries,
    /// Seeds/Feed, Fertilizers/Water, Misc.
    ///
    /// The Seeds/Feed slice carries the seed cost for crop and mixed farms
    /// and the feed cost for livestock farms. On a mixed farm the feed cost
    /// is therefore not visible in the slice, though it still counts toward
    /// `total_expense`.
    pub cost_breakdown: Vec<CostSlice>,
}

impl BudgetSummary {
    /// False when every slice is zero; proportional displays should show
    /// "no cost data" instead of an empty chart.
    pub fn has_cost_data(&self) -> bool {
        self.cost_breakdown.iter().any(|s| !s.amount.is_zero())
    }
}
