use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use farm_cli::{csv_loader, report, utils};
use farm_core::calculations::{BudgetCalculator, BudgetConfig};
use farm_core::models::{
    CropKind, CropPlan, FarmInput, FarmProduction, FarmType, LivestockKind, LivestockPlan,
};
use farm_weather::{WeatherApiClient, WeatherConfig, WeatherProvider};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Farm budget planner.
///
/// Estimates income, expenses, and profit for crop, livestock, and mixed
/// farms, with an optional current-weather lookup.
#[derive(Debug, Parser)]
#[command(name = "farm-budget")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate a budget summary for one farm.
    Estimate(EstimateArgs),
    /// Calculate a summary for every scenario in a CSV file.
    Batch(BatchArgs),
    /// Look up current weather for a city.
    Weather(WeatherArgs),
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// Production mode: crops, livestock, or mixed.
    #[arg(long, value_name = "TYPE")]
    farm_type: String,

    /// Crop grown: rice, wheat, or maize.
    #[arg(long)]
    crop: Option<String>,

    /// Crop land area in hectares.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    area_hectares: Decimal,

    /// Crop yield per hectare (kg or liters).
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    yield_per_hectare: Decimal,

    /// Seed cost.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    seed_cost: Decimal,

    /// Livestock kept: dairy or poultry.
    #[arg(long)]
    livestock: Option<String>,

    /// Number of animals.
    #[arg(long, default_value_t = 0)]
    head_count: u32,

    /// Yield per animal (kg or liters).
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    yield_per_head: Decimal,

    /// Feed cost.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    feed_cost: Decimal,

    /// Market price per unit of output.
    #[arg(long, value_parser = utils::parse_decimal)]
    price_per_unit: Decimal,

    /// Equipment cost.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    equipment_cost: Decimal,

    /// Land or facility rent.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    rent_cost: Decimal,

    /// Labor and salaries.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    salary_cost: Decimal,

    /// Fertilizers and water.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    fertilizer_cost: Decimal,

    /// Miscellaneous costs.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0")]
    misc_cost: Decimal,

    /// Fraction of positive net profit to suggest as a reserve.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0.10")]
    reserve_rate: Decimal,

    /// Also look up current weather for this city before the summary.
    #[arg(long)]
    city: Option<String>,

    /// Weather API key.
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// CSV file of farm scenarios.
    #[arg(long, value_name = "PATH")]
    file: PathBuf,

    /// Fraction of positive net profit to suggest as a reserve.
    #[arg(long, value_parser = utils::parse_decimal, default_value = "0.10")]
    reserve_rate: Decimal,
}

#[derive(Debug, Args)]
struct WeatherArgs {
    /// City name to look up.
    #[arg(long)]
    city: String,

    /// Weather API key.
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── input assembly ──────────────────────────────────────────────────────────

fn crop_plan(args: &EstimateArgs) -> anyhow::Result<CropPlan> {
    let kind = args
        .crop
        .as_deref()
        .map(|value| {
            CropKind::parse(value).ok_or_else(|| {
                anyhow::anyhow!("unknown crop '{value}'; expected rice, wheat, or maize")
            })
        })
        .transpose()?;

    Ok(CropPlan {
        kind,
        area_hectares: args.area_hectares,
        yield_per_hectare: args.yield_per_hectare,
        seed_cost: args.seed_cost,
    })
}

fn livestock_plan(args: &EstimateArgs) -> anyhow::Result<LivestockPlan> {
    let kind = args
        .livestock
        .as_deref()
        .map(|value| {
            LivestockKind::parse(value).ok_or_else(|| {
                anyhow::anyhow!("unknown livestock '{value}'; expected dairy or poultry")
            })
        })
        .transpose()?;

    Ok(LivestockPlan {
        kind,
        head_count: args.head_count,
        yield_per_head: args.yield_per_head,
        feed_cost: args.feed_cost,
    })
}

fn ensure_no_livestock_flags(args: &EstimateArgs) -> anyhow::Result<()> {
    if args.livestock.is_some()
        || args.head_count != 0
        || !args.yield_per_head.is_zero()
        || !args.feed_cost.is_zero()
    {
        anyhow::bail!("livestock flags do not apply to a crops farm");
    }
    Ok(())
}

fn ensure_no_crop_flags(args: &EstimateArgs) -> anyhow::Result<()> {
    if args.crop.is_some()
        || !args.area_hectares.is_zero()
        || !args.yield_per_hectare.is_zero()
        || !args.seed_cost.is_zero()
    {
        anyhow::bail!("crop flags do not apply to a livestock farm");
    }
    Ok(())
}

fn build_input(args: &EstimateArgs) -> anyhow::Result<FarmInput> {
    let farm_type = FarmType::parse(&args.farm_type).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown farm type '{}'; expected crops, livestock, or mixed",
            args.farm_type
        )
    })?;

    let production = match farm_type {
        FarmType::Crops => {
            ensure_no_livestock_flags(args)?;
            FarmProduction::Crops(crop_plan(args)?)
        }
        FarmType::Livestock => {
            ensure_no_crop_flags(args)?;
            FarmProduction::Livestock(livestock_plan(args)?)
        }
        FarmType::Mixed => FarmProduction::Mixed {
            crops: crop_plan(args)?,
            livestock: livestock_plan(args)?,
        },
    };

    Ok(FarmInput {
        production,
        price_per_unit: args.price_per_unit,
        equipment_cost: args.equipment_cost,
        rent_cost: args.rent_cost,
        salary_cost: args.salary_cost,
        fertilizer_cost: args.fertilizer_cost,
        misc_cost: args.misc_cost,
    })
}

// ─── commands ────────────────────────────────────────────────────────────────

async fn estimate(args: EstimateArgs) -> anyhow::Result<()> {
    if let Some(city) = args.city.as_deref() {
        // Weather is informational; a failed lookup never blocks the estimate.
        let client = WeatherApiClient::new(WeatherConfig::new(args.api_key.clone()));
        match client.current(city).await {
            Ok(weather) => println!("{}\n", report::render_weather(&weather)),
            Err(error) => warn!(%city, "weather lookup failed: {error}"),
        }
    }

    let input = build_input(&args)?;
    let calculator = BudgetCalculator::new(BudgetConfig {
        reserve_rate: args.reserve_rate,
    });
    let summary = calculator.calculate(&input)?;
    println!("{}", report::render_summary(&summary));
    Ok(())
}

fn batch(args: &BatchArgs) -> anyhow::Result<()> {
    let scenarios = csv_loader::load_from_file(&args.file)
        .with_context(|| format!("cannot load scenarios from '{}'", args.file.display()))?;
    info!(count = scenarios.len(), "loaded scenarios");

    let calculator = BudgetCalculator::new(BudgetConfig {
        reserve_rate: args.reserve_rate,
    });
    for (index, input) in scenarios.iter().enumerate() {
        let summary = calculator.calculate(input)?;
        println!("Scenario {} ({})", index + 1, input.farm_type().as_str());
        println!("{}\n", report::render_summary(&summary));
    }
    Ok(())
}

async fn weather(args: WeatherArgs) -> anyhow::Result<()> {
    let client = WeatherApiClient::new(WeatherConfig::new(args.api_key));
    let weather = client.current(&args.city).await?;
    println!("{}", report::render_weather(&weather));
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Estimate(args) => estimate(args).await,
        Command::Batch(args) => batch(&args),
        Command::Weather(args) => weather(args).await,
    }
}
