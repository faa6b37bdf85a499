use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmType {
    Crops,
    Livestock,
    Mixed,
}

impl FarmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crops => "crops",
            Self::Livestock => "livestock",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "crops" => Some(Self::Crops),
            "livestock" => Some(Self::Livestock),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// Descriptive only; never enters the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropKind {
    Rice,
    Wheat,
    Maize,
}

impl CropKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::Wheat => "wheat",
            Self::Maize => "maize",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rice" => Some(Self::Rice),
            "wheat" => Some(Self::Wheat),
            "maize" => Some(Self::Maize),
            _ => None,
        }
    }
}

/// Descriptive only; never enters the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivestockKind {
    Dairy,
    Poultry,
}

impl LivestockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Poultry => "poultry",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dairy" => Some(Self::Dairy),
            "poultry" => Some(Self::Poultry),
            _ => None,
        }
    }
}
