//! Plain-text rendering of budget summaries and weather reports.
//!
//! All currency and chart formatting lives here; the calculator itself
//! returns raw amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use farm_core::models::BudgetSummary;
use farm_weather::WeatherReport;

use crate::utils::format_currency;

/// Renders the full result block: totals, reserve tip, and the cost
/// breakdown with per-slice percentages.
pub fn render_summary(summary: &BudgetSummary) -> String {
    let profit_label = if summary.net_profit < Decimal::ZERO {
        "Loss:"
    } else {
        "Net Profit:"
    };

    let mut lines = vec![
        format!("Income:      {}", format_currency(summary.total_income)),
        format!("Expenses:    {}", format_currency(summary.total_expense)),
        format!("{profit_label:<12} {}", format_currency(summary.net_profit)),
        format!(
            "Tip: save {} for emergencies or future investment.",
            format_currency(summary.suggested_reserve)
        ),
        String::new(),
    ];

    if summary.has_cost_data() {
        lines.push("Cost breakdown:".to_string());
        let total: Decimal = summary.cost_breakdown.iter().map(|s| s.amount).sum();
        for slice in &summary.cost_breakdown {
            let share = (slice.amount * Decimal::ONE_HUNDRED / total)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            lines.push(format!(
                "  {:<18}{:>14}{:>8}",
                slice.category.label(),
                format_currency(slice.amount),
                format!("{share:.1}%"),
            ));
        }
    } else {
        lines.push("Cost breakdown: no cost data".to_string());
    }

    lines.join("\n")
}

/// One-line weather report, e.g. `Pune: 31.5°C, Partly cloudy (Humidity: 58%)`.
pub fn render_weather(weather: &WeatherReport) -> String {
    format!(
        "{}: {}°C, {} (Humidity: {}%)",
        weather.location, weather.temperature_c, weather.condition, weather.humidity_pct
    )
}
