use crate::value_objects::price_range::PriceRange;
use serde::{Deserialize, Serialize};

/// Point-in-time inputs for valuing an out-of-range position.
///
/// Built by the caller on every input change and discarded after
/// evaluation. Amounts and prices are not validated: negative values,
/// inverted bounds and non-finite numbers all flow through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    /// Raw token0 (quote) holdings.
    pub token0_amount: f64,
    /// Raw token1 (base) holdings.
    pub token1_amount: f64,
    pub token0_symbol: String,
    pub token1_symbol: String,
    /// Lower bound, token0 per token1.
    pub min_price: f64,
    /// Upper bound, token0 per token1.
    pub max_price: f64,
    /// Market price used for the aggregate value only.
    pub current_price: f64,
    /// Token0 fees owed but not yet withdrawn.
    pub uncollected_token0: f64,
    /// Token1 fees owed but not yet withdrawn.
    pub uncollected_token1: f64,
}

impl PositionSnapshot {
    /// Creates an all-zero snapshot for the given pair.
    pub fn new(token0_symbol: impl Into<String>, token1_symbol: impl Into<String>) -> Self {
        Self {
            token0_amount: 0.0,
            token1_amount: 0.0,
            token0_symbol: token0_symbol.into(),
            token1_symbol: token1_symbol.into(),
            min_price: 0.0,
            max_price: 0.0,
            current_price: 0.0,
            uncollected_token0: 0.0,
            uncollected_token1: 0.0,
        }
    }

    /// The configured bounds as a range.
    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min_price, self.max_price)
    }
}

impl Default for PositionSnapshot {
    fn default() -> Self {
        Self::new("USDC", "WETH")
    }
}
