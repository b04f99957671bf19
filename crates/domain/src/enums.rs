use crate::error::ParseScenarioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which bound of the configured range the market price has exited.
///
/// The scenario is always chosen by the caller; the valuation engine never
/// derives it from the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Price fell under the minimum bound; the position is held in token1.
    Below,
    /// Price rose over the maximum bound; the position is held in token0.
    Above,
}

impl Scenario {
    /// Both scenarios, in display order.
    pub const ALL: [Scenario; 2] = [Scenario::Below, Scenario::Above];

    /// Human readable label for toggles and table headers.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Below => "Price Below Range",
            Scenario::Above => "Price Above Range",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Below => write!(f, "below"),
            Scenario::Above => write!(f, "above"),
        }
    }
}

impl FromStr for Scenario {
    type Err = ParseScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("below") {
            Ok(Scenario::Below)
        } else if trimmed.eq_ignore_ascii_case("above") {
            Ok(Scenario::Above)
        } else {
            Err(ParseScenarioError(s.to_string()))
        }
    }
}
