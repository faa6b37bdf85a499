use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::farm_type::{CropKind, FarmType, LivestockKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPlan {
    pub kind: Option<CropKind>,
    pub area_hectares: Decimal,
    pub yield_per_hectare: Decimal,
    pub seed_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivestockPlan {
    pub kind: Option<LivestockKind>,
    pub head_count: u32,
    pub yield_per_head: Decimal,
    pub feed_cost: Decimal,
}

/// Production-specific inputs for one season.
///
/// A variant carries exactly the fields that apply to its production mode,
/// so an inapplicable field (say, feed cost on a pure crop farm) cannot be
/// represented at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmProduction {
    Crops(CropPlan),
    Livestock(LivestockPlan),
    Mixed {
        crops: CropPlan,
        livestock: LivestockPlan,
    },
}

impl FarmProduction {
    pub fn farm_type(&self) -> FarmType {
        match self {
            Self::Crops(_) => FarmType::Crops,
            Self::Livestock(_) => FarmType::Livestock,
            Self::Mixed { .. } => FarmType::Mixed,
        }
    }

    /// The crop plan, when this production mode grows crops.
    pub fn crops(&self) -> Option<&CropPlan> {
        match self {
            Self::Crops(crops) | Self::Mixed { crops, .. } => Some(crops),
            Self::Livestock(_) => None,
        }
    }

    /// The livestock plan, when this production mode keeps animals.
    pub fn livestock(&self) -> Option<&LivestockPlan> {
        match self {
            Self::Livestock(livestock) | Self::Mixed { livestock, .. } => Some(livestock),
            Self::Crops(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmInput {
    pub production: FarmProduction,

    /// Market price per unit of output (currency per kg or liter).
    ///
    /// On mixed farms this single price multiplies both crop and livestock
    /// output, even though the two are measured in different units.
    pub price_per_unit: Decimal,

    // Fixed costs (independent of output)
    pub equipment_cost: Decimal,
    pub rent_cost: Decimal,
    pub salary_cost: Decimal,

    // Variable costs shared by all production modes
    pub fertilizer_cost: Decimal,
    pub misc_cost: Decimal,
}

impl FarmInput {
    pub fn farm_type(&self) -> FarmType {
        self.production.farm_type()
    }
}
