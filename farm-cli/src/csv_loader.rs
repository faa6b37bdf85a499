//! CSV loader for farm scenario input data.
//!
//! ## CSV Format
//!
//! The expected CSV format uses the following columns. Column order does **not**
//! matter (headers are matched by name). All header names are case-sensitive
//! and must match exactly.
//!
//! | Column              | Required | Type    | Notes                                      |
//! |---------------------|----------|---------|--------------------------------------------|
//! | `farm_type`         | yes      | string  | One of: `crops`, `livestock`, `mixed`      |
//! | `crop`              | no       | string  | `rice`, `wheat`, or `maize`                |
//! | `area_hectares`     | no       | decimal | Crop land area                             |
//! | `yield_per_hectare` | no       | decimal | Crop yield (kg/liters per hectare)         |
//! | `seed_cost`         | no       | decimal |                                            |
//! | `livestock`         | no       | string  | `dairy` or `poultry`                       |
//! | `head_count`        | no       | integer | Number of animals                          |
//! | `yield_per_head`    | no       | decimal | Yield per animal (kg/liters)               |
//! | `feed_cost`         | no       | decimal |                                            |
//! | `price_per_unit`    | yes      | decimal | Market price per unit of output            |
//! | `equipment_cost`    | no       | decimal |                                            |
//! | `rent_cost`         | no       | decimal |                                            |
//! | `salary_cost`       | no       | decimal |                                            |
//! | `fertilizer_cost`   | no       | decimal |                                            |
//! | `misc_cost`         | no       | decimal |                                            |
//!
//! Empty optional cells default to zero. Cells that do not apply to the row's
//! `farm_type` (for example `feed_cost` on a `crops` row) must be empty or
//! zero; a non-empty value there is a row error, not silently dropped.
//!
//! ### Minimal example
//!
//! ```csv
//! farm_type,area_hectares,yield_per_hectare,price_per_unit
//! crops,2.0,1000,20
//! ```
//!
//! ### Full example
//!
//! ```csv
//! farm_type,crop,area_hectares,yield_per_hectare,seed_cost,livestock,head_count,yield_per_head,feed_cost,price_per_unit,equipment_cost,rent_cost,salary_cost,fertilizer_cost,misc_cost
//! crops,wheat,2.0,1000,5000,,,,,20,0,0,0,2000,500
//! livestock,,,,,dairy,50,10,8000,30,3000,0,6000,0,500
//! ```

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use farm_core::models::{
    CropKind, CropPlan, FarmInput, FarmProduction, FarmType, LivestockKind, LivestockPlan,
};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    farm_type: String,
    crop: Option<String>,
    area_hectares: Option<Decimal>,
    yield_per_hectare: Option<Decimal>,
    seed_cost: Option<Decimal>,
    livestock: Option<String>,
    head_count: Option<u32>,
    yield_per_head: Option<Decimal>,
    feed_cost: Option<Decimal>,
    price_per_unit: Decimal,
    equipment_cost: Option<Decimal>,
    rent_cost: Option<Decimal>,
    salary_cost: Option<Decimal>,
    fertilizer_cost: Option<Decimal>,
    misc_cost: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `farm_type` cell contained a value that is not one of the
    /// recognised codes. `row` is the 1-based row number (header = row 0).
    #[error("unrecognised farm type '{value}' on row {row}")]
    InvalidFarmType { value: String, row: usize },

    #[error("unrecognised crop '{value}' on row {row}")]
    InvalidCropKind { value: String, row: usize },

    #[error("unrecognised livestock '{value}' on row {row}")]
    InvalidLivestockKind { value: String, row: usize },

    /// A cell carried a value that does not apply to the row's farm type.
    #[error("'{field}' does not apply to a {farm_type} row (row {row})")]
    InapplicableField {
        field: &'static str,
        farm_type: &'static str,
        row: usize,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn ensure_unused_amount(
    field: &'static str,
    value: Option<Decimal>,
    farm_type: FarmType,
    row: usize,
) -> Result<(), ScenarioLoadError> {
    if value.is_some_and(|v| !v.is_zero()) {
        return Err(ScenarioLoadError::InapplicableField {
            field,
            farm_type: farm_type.as_str(),
            row,
        });
    }
    Ok(())
}

fn ensure_unused_count(
    field: &'static str,
    value: Option<u32>,
    farm_type: FarmType,
    row: usize,
) -> Result<(), ScenarioLoadError> {
    if value.is_some_and(|v| v != 0) {
        return Err(ScenarioLoadError::InapplicableField {
            field,
            farm_type: farm_type.as_str(),
            row,
        });
    }
    Ok(())
}

fn ensure_unused_text(
    field: &'static str,
    value: &Option<String>,
    farm_type: FarmType,
    row: usize,
) -> Result<(), ScenarioLoadError> {
    if value.as_deref().is_some_and(|v| !v.is_empty()) {
        return Err(ScenarioLoadError::InapplicableField {
            field,
            farm_type: farm_type.as_str(),
            row,
        });
    }
    Ok(())
}

fn crop_plan(row: &CsvRow, row_number: usize) -> Result<CropPlan, ScenarioLoadError> {
    let kind = match row.crop.as_deref() {
        Some(value) if !value.is_empty() => {
            Some(
                CropKind::parse(value).ok_or_else(|| ScenarioLoadError::InvalidCropKind {
                    value: value.to_string(),
                    row: row_number,
                })?,
            )
        }
        _ => None,
    };
    Ok(CropPlan {
        kind,
        area_hectares: row.area_hectares.unwrap_or(Decimal::ZERO),
        yield_per_hectare: row.yield_per_hectare.unwrap_or(Decimal::ZERO),
        seed_cost: row.seed_cost.unwrap_or(Decimal::ZERO),
    })
}

fn livestock_plan(row: &CsvRow, row_number: usize) -> Result<LivestockPlan, ScenarioLoadError> {
    let kind = match row.livestock.as_deref() {
        Some(value) if !value.is_empty() => Some(LivestockKind::parse(value).ok_or_else(|| {
            ScenarioLoadError::InvalidLivestockKind {
                value: value.to_string(),
                row: row_number,
            }
        })?),
        _ => None,
    };
    Ok(LivestockPlan {
        kind,
        head_count: row.head_count.unwrap_or(0),
        yield_per_head: row.yield_per_head.unwrap_or(Decimal::ZERO),
        feed_cost: row.feed_cost.unwrap_or(Decimal::ZERO),
    })
}

/// Convert a single CSV row into a FarmInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(row: CsvRow, row_number: usize) -> Result<FarmInput, ScenarioLoadError> {
    let farm_type =
        FarmType::parse(&row.farm_type).ok_or_else(|| ScenarioLoadError::InvalidFarmType {
            value: row.farm_type.clone(),
            row: row_number,
        })?;

    let production = match farm_type {
        FarmType::Crops => {
            ensure_unused_text("livestock", &row.livestock, farm_type, row_number)?;
            ensure_unused_count("head_count", row.head_count, farm_type, row_number)?;
            ensure_unused_amount("yield_per_head", row.yield_per_head, farm_type, row_number)?;
            ensure_unused_amount("feed_cost", row.feed_cost, farm_type, row_number)?;
            FarmProduction::Crops(crop_plan(&row, row_number)?)
        }
        FarmType::Livestock => {
            ensure_unused_text("crop", &row.crop, farm_type, row_number)?;
            ensure_unused_amount("area_hectares", row.area_hectares, farm_type, row_number)?;
            ensure_unused_amount(
                "yield_per_hectare",
                row.yield_per_hectare,
                farm_type,
                row_number,
            )?;
            ensure_unused_amount("seed_cost", row.seed_cost, farm_type, row_number)?;
            FarmProduction::Livestock(livestock_plan(&row, row_number)?)
        }
        FarmType::Mixed => FarmProduction::Mixed {
            crops: crop_plan(&row, row_number)?,
            livestock: livestock_plan(&row, row_number)?,
        },
    };

    Ok(FarmInput {
        production,
        price_per_unit: row.price_per_unit,
        equipment_cost: row.equipment_cost.unwrap_or(Decimal::ZERO),
        rent_cost: row.rent_cost.unwrap_or(Decimal::ZERO),
        salary_cost: row.salary_cost.unwrap_or(Decimal::ZERO),
        fertilizer_cost: row.fertilizer_cost.unwrap_or(Decimal::ZERO),
        misc_cost: row.misc_cost.unwrap_or(Decimal::ZERO),
    })
}

/// Parse CSV data from any reader and return the scenarios in file order.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<FarmInput>, ScenarioLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        scenarios.push(convert_row(row, index + 1)?);
    }
    Ok(scenarios)
}

/// Parse CSV text (the full file contents as a &str).
pub fn load_from_str(data: &str) -> Result<Vec<FarmInput>, ScenarioLoadError> {
    load_from_reader(data.as_bytes())
}

/// Read and parse a CSV file from disk.
pub fn load_from_file(path: &Path) -> Result<Vec<FarmInput>, ScenarioLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut scenarios = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        scenarios.push(convert_row(row, index + 1)?);
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const FULL_HEADER: &str = "farm_type,crop,area_hectares,yield_per_hectare,seed_cost,livestock,head_count,yield_per_head,feed_cost,price_per_unit,equipment_cost,rent_cost,salary_cost,fertilizer_cost,misc_cost";

    #[test]
    fn loads_a_crops_row() {
        let data = format!(
            "{FULL_HEADER}\ncrops,wheat,2.0,1000,5000,,,,,20,0,0,0,2000,500"
        );

        let scenarios = load_from_str(&data).unwrap();

        assert_eq!(scenarios.len(), 1);
        let input = &scenarios[0];
        assert_eq!(input.farm_type(), FarmType::Crops);
        assert_eq!(input.price_per_unit, dec!(20));
        assert_eq!(input.fertilizer_cost, dec!(2000));
        let crops = input.production.crops().unwrap();
        assert_eq!(crops.kind, Some(CropKind::Wheat));
        assert_eq!(crops.area_hectares, dec!(2.0));
        assert_eq!(crops.seed_cost, dec!(5000));
        assert!(input.production.livestock().is_none());
    }

    #[test]
    fn loads_a_livestock_row() {
        let data = format!(
            "{FULL_HEADER}\nlivestock,,,,,dairy,50,10,8000,30,3000,0,6000,0,500"
        );

        let scenarios = load_from_str(&data).unwrap();

        let input = &scenarios[0];
        assert_eq!(input.farm_type(), FarmType::Livestock);
        let livestock = input.production.livestock().unwrap();
        assert_eq!(livestock.kind, Some(LivestockKind::Dairy));
        assert_eq!(livestock.head_count, 50);
        assert_eq!(livestock.feed_cost, dec!(8000));
        assert_eq!(input.equipment_cost, dec!(3000));
    }

    #[test]
    fn loads_a_mixed_row_with_both_plans() {
        let data = format!(
            "{FULL_HEADER}\nmixed,rice,1.5,800,4000,poultry,120,2,3000,15,0,0,0,1000,200"
        );

        let scenarios = load_from_str(&data).unwrap();

        let input = &scenarios[0];
        assert_eq!(input.farm_type(), FarmType::Mixed);
        assert_eq!(input.production.crops().unwrap().seed_cost, dec!(4000));
        assert_eq!(input.production.livestock().unwrap().head_count, 120);
    }

    #[test]
    fn empty_optional_cells_default_to_zero() {
        let data = "farm_type,area_hectares,yield_per_hectare,price_per_unit\ncrops,2.0,1000,20";

        let scenarios = load_from_str(data).unwrap();

        let input = &scenarios[0];
        assert_eq!(input.equipment_cost, dec!(0));
        assert_eq!(input.misc_cost, dec!(0));
        assert_eq!(input.production.crops().unwrap().seed_cost, dec!(0));
    }

    #[test]
    fn header_order_does_not_matter() {
        let data = "price_per_unit,farm_type,area_hectares,yield_per_hectare\n20,crops,2.0,1000";

        let scenarios = load_from_str(data).unwrap();

        assert_eq!(scenarios[0].price_per_unit, dec!(20));
        assert_eq!(
            scenarios[0].production.crops().unwrap().area_hectares,
            dec!(2.0)
        );
    }

    #[test]
    fn unknown_farm_type_is_a_row_error() {
        let data = "farm_type,price_per_unit\norchard,20";

        let result = load_from_str(data);

        match result {
            Err(ScenarioLoadError::InvalidFarmType { value, row }) => {
                assert_eq!(value, "orchard");
                assert_eq!(row, 1);
            }
            other => panic!("expected InvalidFarmType, got {other:#?}"),
        }
    }

    #[test]
    fn feed_cost_on_a_crops_row_is_rejected() {
        let data = format!(
            "{FULL_HEADER}\ncrops,wheat,2.0,1000,5000,,,,8000,20,0,0,0,2000,500"
        );

        let result = load_from_str(&data);

        match result {
            Err(ScenarioLoadError::InapplicableField { field, row, .. }) => {
                assert_eq!(field, "feed_cost");
                assert_eq!(row, 1);
            }
            other => panic!("expected InapplicableField, got {other:#?}"),
        }
    }

    #[test]
    fn seed_cost_on_a_livestock_row_is_rejected() {
        let data = format!(
            "{FULL_HEADER}\nlivestock,,,,5000,dairy,50,10,8000,30,0,0,0,0,0"
        );

        let result = load_from_str(&data);

        assert!(matches!(
            result,
            Err(ScenarioLoadError::InapplicableField {
                field: "seed_cost",
                ..
            })
        ));
    }

    #[test]
    fn zero_in_an_inapplicable_cell_is_allowed() {
        let data = format!(
            "{FULL_HEADER}\ncrops,wheat,2.0,1000,5000,,0,0,0,20,0,0,0,2000,500"
        );

        let scenarios = load_from_str(&data).unwrap();

        assert_eq!(scenarios.len(), 1);
    }

    #[test]
    fn unknown_crop_kind_is_a_row_error() {
        let data = format!("{FULL_HEADER}\ncrops,barley,2.0,1000,5000,,,,,20,0,0,0,0,0");

        let result = load_from_str(&data);

        assert!(matches!(
            result,
            Err(ScenarioLoadError::InvalidCropKind { .. })
        ));
    }

    #[test]
    fn row_numbers_count_from_one() {
        let data = format!(
            "{FULL_HEADER}\ncrops,wheat,2.0,1000,5000,,,,,20,0,0,0,0,0\npasture,,,,,,,,,10,0,0,0,0,0"
        );

        let result = load_from_str(&data);

        match result {
            Err(ScenarioLoadError::InvalidFarmType { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected InvalidFarmType, got {other:#?}"),
        }
    }
}
