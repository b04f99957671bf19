use crate::enums::Scenario;
use serde::{Deserialize, Serialize};

/// Configured price bounds of a position, quoted as token0 per token1.
///
/// Bounds are stored as given. An inverted range (`min_price > max_price`) is
/// representable and simply never contains any price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceRange {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            min_price,
            max_price,
        }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }

    /// True when the lower bound sits above the upper bound.
    pub fn is_inverted(&self) -> bool {
        self.min_price > self.max_price
    }

    /// Returns the side the given price has exited through, if any.
    ///
    /// Advisory only: callers may use it to suggest or sanity-check a
    /// scenario, the engine does not consult it.
    pub fn exit_side(&self, price: f64) -> Option<Scenario> {
        if price < self.min_price {
            Some(Scenario::Below)
        } else if price > self.max_price {
            Some(Scenario::Above)
        } else {
            None
        }
    }
}
