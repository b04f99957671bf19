use serde::{Deserialize, Serialize};

/// Output of a single valuation.
///
/// Built fresh on every call; it shares nothing with the snapshot it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Token0 holdings after the scenario's conversion.
    pub total_token0: f64,
    /// Token1 holdings after the scenario's conversion.
    pub total_token1: f64,
    /// Aggregate value in token0 units, token1 priced at the current price.
    #[serde(rename = "totalValueUSD")]
    pub total_value_usd: f64,
    pub token0_symbol: String,
    pub token1_symbol: String,
}
