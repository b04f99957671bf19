//! Rendering of valuation results.
//!
//! Token1 totals are shown with 8 decimals and token0 totals with 2. The
//! estimated value line only appears when the current price is positive.
//! Rounding is done on the exact binary value of the `f64` with ties away
//! from zero, so `0.125` renders as `0.13` rather than the `0.12` that
//! `format!` would produce.

use crate::entities::position::PositionSnapshot;
use crate::enums::Scenario;
use crate::value_objects::valuation_result::ValuationResult;
use rust_decimal::prelude::*;
use serde::Serialize;
use std::fmt;

/// Decimals used for token1 totals.
pub const TOKEN1_DECIMALS: u32 = 8;
/// Decimals used for token0 totals and the aggregate value.
pub const TOKEN0_DECIMALS: u32 = 2;

/// Formats a number with a fixed number of decimals.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`. Magnitudes
/// outside the `Decimal` range fall back to the standard formatter. Zero is
/// never rendered with a sign.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let precision = decimals as usize;
    match round_half_away(value, decimals) {
        Some(rounded) => format!("{:.*}", precision, rounded),
        None => format!("{:.*}", precision, value),
    }
}

fn round_half_away(value: f64, decimals: u32) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

/// Text lines shown for one valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLines {
    /// e.g. `1.55000000 WETH`
    pub total_token1: String,
    /// e.g. `10.00 USDC`
    pub total_token0: String,
    /// e.g. `$3110.00 USD`; absent unless the current price is positive.
    pub total_value: Option<String>,
}

/// A valuation result together with its rendered form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationReport {
    pub scenario: Scenario,
    pub result: ValuationResult,
    pub display: DisplayLines,
}

impl ValuationReport {
    /// Builds the report for a result computed from `snapshot`.
    ///
    /// The snapshot is only consulted for the current price, which decides
    /// whether the value line is shown.
    pub fn new(scenario: Scenario, result: &ValuationResult, snapshot: &PositionSnapshot) -> Self {
        let total_value = (snapshot.current_price > 0.0).then(|| {
            format!(
                "${} USD",
                format_fixed(result.total_value_usd, TOKEN0_DECIMALS)
            )
        });

        let display = DisplayLines {
            total_token1: format!(
                "{} {}",
                format_fixed(result.total_token1, TOKEN1_DECIMALS),
                result.token1_symbol
            ),
            total_token0: format!(
                "{} {}",
                format_fixed(result.total_token0, TOKEN0_DECIMALS),
                result.token0_symbol
            ),
            total_value,
        };

        Self {
            scenario,
            result: result.clone(),
            display,
        }
    }
}

impl fmt::Display for ValuationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.scenario.label())?;
        writeln!(
            f,
            "Total {}: {}",
            self.result.token1_symbol, self.display.total_token1
        )?;
        write!(
            f,
            "Total {}: {}",
            self.result.token0_symbol, self.display.total_token0
        )?;
        if let Some(value) = &self.display.total_value {
            write!(f, "\nEstimated Total Value: {}", value)?;
        }
        Ok(())
    }
}
