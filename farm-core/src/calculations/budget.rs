//! Farm budget calculation.
//!
//! This module maps a [`FarmInput`] record to a [`BudgetSummary`]: income from
//! the selected production mode, expenses split into fixed and variable cost,
//! net profit, a suggested contingency reserve, and the cost breakdown used
//! for proportional display.
//!
//! # Calculation Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Income: production output × market price |
//! | 2    | Variable cost: production-specific costs + fertilizers + misc |
//! | 3    | Fixed cost: equipment + rent + salaries |
//! | 4    | Total expense: fixed + variable |
//! | 5    | Net profit: income − expense (may be negative) |
//! | 6    | Suggested reserve: reserve rate × net profit, when positive |
//! | 7    | Cost breakdown: six display slices in fixed order |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use farm_core::calculations::BudgetCalculator;
//! use farm_core::models::{CropPlan, FarmInput, FarmProduction};
//!
//! let input = FarmInput {
//!     production: FarmProduction::Crops(CropPlan {
//!         kind: None,
//!         area_hectares: dec!(2.0),
//!         yield_per_hectare: dec!(1000),
//!         seed_cost: dec!(5000),
//!     }),
//!     price_per_unit: dec!(20),
//!     equipment_cost: dec!(0),
//!     rent_cost: dec!(0),
//!     salary_cost: dec!(0),
//!     fertilizer_cost: dec!(2000),
//!     misc_cost: dec!(500),
//! };
//!
//! let calculator = BudgetCalculator::default();
//! let summary = calculator.calculate(&input).unwrap();
//!
//! assert_eq!(summary.total_income, dec!(40000.00));
//! assert_eq!(summary.total_expense, dec!(7500.00));
//! assert_eq!(summary.net_profit, dec!(32500.00));
//! assert_eq!(summary.suggested_reserve, dec!(3250.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::models::{
    BudgetSummary, CostCategory, CostSlice, CropPlan, FarmInput, FarmProduction, LivestockPlan,
};

/// Errors that can occur during budget calculations.
///
/// The calculator rejects invalid input outright rather than clamping or
/// silently zeroing it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// A quantity field (area, yield, or price) was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeQuantity { field: &'static str, value: Decimal },

    /// A cost field was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeCost { field: &'static str, value: Decimal },

    /// The reserve rate must be between 0 and 1.
    #[error("reserve rate must be between 0 and 1, got {0}")]
    InvalidReserveRate(Decimal),
}

/// Configuration parameters for budget calculations.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use farm_core::calculations::BudgetConfig;
///
/// let config = BudgetConfig {
///     reserve_rate: dec!(0.10),
/// };
/// assert_eq!(config, BudgetConfig::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Fraction of positive net profit suggested as a contingency reserve.
    pub reserve_rate: Decimal,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            // 10%
            reserve_rate: Decimal::new(10, 2),
        }
    }
}

impl BudgetConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::InvalidReserveRate`] if `reserve_rate` is not
    /// in `[0, 1]`.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.reserve_rate < Decimal::ZERO || self.reserve_rate > Decimal::ONE {
            return Err(BudgetError::InvalidReserveRate(self.reserve_rate));
        }
        Ok(())
    }
}

/// Calculator mapping farm input to a budget summary.
///
/// A single stateless transformation: the same input always produces an
/// identical summary, and the calculator holds no per-call state.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use farm_core::calculations::{BudgetCalculator, BudgetConfig};
/// use farm_core::models::{FarmInput, FarmProduction, LivestockPlan};
///
/// let input = FarmInput {
///     production: FarmProduction::Livestock(LivestockPlan {
///         kind: None,
///         head_count: 50,
///         yield_per_head: dec!(10),
///         feed_cost: dec!(8000),
///     }),
///     price_per_unit: dec!(30),
///     equipment_cost: dec!(0),
///     rent_cost: dec!(0),
///     salary_cost: dec!(0),
///     fertilizer_cost: dec!(0),
///     misc_cost: dec!(0),
/// };
///
/// let calculator = BudgetCalculator::new(BudgetConfig::default());
/// let summary = calculator.calculate(&input).unwrap();
///
/// assert_eq!(summary.total_income, dec!(15000.00));
/// assert_eq!(summary.total_expense, dec!(8000.00));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BudgetCalculator {
    config: BudgetConfig,
}

impl BudgetCalculator {
    /// Creates a new calculator with the given configuration.
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete budget summary for one farm input.
    ///
    /// This is the main entry point. It validates the configuration and the
    /// input, performs all calculation steps, and returns the summary. All
    /// monetary outputs are rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError`] if the configuration is invalid or any input
    /// quantity or cost is negative.
    pub fn calculate(&self, input: &FarmInput) -> Result<BudgetSummary, BudgetError> {
        self.config.validate()?;
        Self::validate_input(input)?;

        // Step 1: income from the selected production mode
        let total_income = round_half_up(Self::total_income(input));

        // Steps 2-4: expenses
        let variable_cost = Self::variable_cost(input);
        let fixed_cost = Self::fixed_cost(input);
        let total_expense = round_half_up(fixed_cost + variable_cost);

        // Step 5: profit, negative when expenses exceed income
        let net_profit = total_income - total_expense;

        // Step 6: reserve suggestion
        let suggested_reserve = self.suggested_reserve(net_profit);

        // Step 7: display breakdown
        let cost_breakdown = Self::cost_breakdown(input);
        if cost_breakdown.iter().all(|s| s.amount.is_zero()) {
            warn!(
                farm_type = input.farm_type().as_str(),
                "all cost amounts are zero; proportional display has no cost data"
            );
        }

        debug!(
            farm_type = input.farm_type().as_str(),
            %total_income,
            %total_expense,
            %net_profit,
            "budget calculated"
        );

        Ok(BudgetSummary {
            total_income,
            total_expense,
            net_profit,
            suggested_reserve,
            cost_breakdown,
        })
    }

    fn validate_input(input: &FarmInput) -> Result<(), BudgetError> {
        if let Some(crops) = input.production.crops() {
            Self::non_negative_quantity("crop area", crops.area_hectares)?;
            Self::non_negative_quantity("crop yield per hectare", crops.yield_per_hectare)?;
            Self::non_negative_cost("seed cost", crops.seed_cost)?;
        }
        if let Some(livestock) = input.production.livestock() {
            // head_count is unsigned and needs no check
            Self::non_negative_quantity("livestock yield per head", livestock.yield_per_head)?;
            Self::non_negative_cost("feed cost", livestock.feed_cost)?;
        }
        Self::non_negative_quantity("price per unit", input.price_per_unit)?;
        Self::non_negative_cost("equipment cost", input.equipment_cost)?;
        Self::non_negative_cost("rent cost", input.rent_cost)?;
        Self::non_negative_cost("salary cost", input.salary_cost)?;
        Self::non_negative_cost("fertilizer cost", input.fertilizer_cost)?;
        Self::non_negative_cost("misc cost", input.misc_cost)?;
        Ok(())
    }

    fn non_negative_quantity(field: &'static str, value: Decimal) -> Result<(), BudgetError> {
        if value < Decimal::ZERO {
            return Err(BudgetError::NegativeQuantity { field, value });
        }
        Ok(())
    }

    fn non_negative_cost(field: &'static str, value: Decimal) -> Result<(), BudgetError> {
        if value < Decimal::ZERO {
            return Err(BudgetError::NegativeCost { field, value });
        }
        Ok(())
    }

    /// Total income: production output × market price.
    ///
    /// On mixed farms both outputs are summed before applying the single
    /// shared price.
    fn total_income(input: &FarmInput) -> Decimal {
        let output = match &input.production {
            FarmProduction::Crops(crops) => Self::crop_output(crops),
            FarmProduction::Livestock(livestock) => Self::livestock_output(livestock),
            FarmProduction::Mixed { crops, livestock } => {
                Self::crop_output(crops) + Self::livestock_output(livestock)
            }
        };
        output * input.price_per_unit
    }

    /// Crop output in kg or liters: area × yield per hectare.
    fn crop_output(crops: &CropPlan) -> Decimal {
        crops.area_hectares * crops.yield_per_hectare
    }

    /// Livestock output in kg or liters: head count × yield per head.
    fn livestock_output(livestock: &LivestockPlan) -> Decimal {
        Decimal::from(livestock.head_count) * livestock.yield_per_head
    }

    /// Variable cost: production-specific costs plus fertilizers and misc.
    ///
    /// Seed cost applies to crop farms, feed cost to livestock farms, and
    /// both to mixed farms.
    fn variable_cost(input: &FarmInput) -> Decimal {
        let production_cost = match &input.production {
            FarmProduction::Crops(crops) => crops.seed_cost,
            FarmProduction::Livestock(livestock) => livestock.feed_cost,
            FarmProduction::Mixed { crops, livestock } => crops.seed_cost + livestock.feed_cost,
        };
        production_cost + input.fertilizer_cost + input.misc_cost
    }

    /// Fixed cost: equipment + rent + salaries, for every production mode.
    fn fixed_cost(input: &FarmInput) -> Decimal {
        input.equipment_cost + input.rent_cost + input.salary_cost
    }

    /// Reserve suggestion: `reserve_rate × net_profit` when profitable,
    /// otherwise zero.
    fn suggested_reserve(&self, net_profit: Decimal) -> Decimal {
        if net_profit > Decimal::ZERO {
            round_half_up(self.config.reserve_rate * net_profit)
        } else {
            Decimal::ZERO
        }
    }

    /// Builds the six display slices in fixed order.
    ///
    /// The Seeds/Feed slice carries the seed cost for crop and mixed farms
    /// and the feed cost for livestock farms. On a mixed farm the feed cost
    /// does not appear in the slice even though it counts toward the total
    /// expense.
    fn cost_breakdown(input: &FarmInput) -> Vec<CostSlice> {
        let seeds_feed = match &input.production {
            FarmProduction::Crops(crops) | FarmProduction::Mixed { crops, .. } => crops.seed_cost,
            FarmProduction::Livestock(livestock) => livestock.feed_cost,
        };
        vec![
            CostSlice {
                category: CostCategory::Equipment,
                amount: input.equipment_cost,
            },
            CostSlice {
                category: CostCategory::Rent,
                amount: input.rent_cost,
            },
            CostSlice {
                category: CostCategory::Salaries,
                amount: input.salary_cost,
            },
            CostSlice {
                category: CostCategory::SeedsFeed,
                amount: seeds_feed,
            },
            CostSlice {
                category: CostCategory::FertilizersWater,
                amount: input.fertilizer_cost,
            },
            CostSlice {
                category: CostCategory::Miscellaneous,
                amount: input.misc_cost,
            },
        ]
    }
}
