//! Out-of-range valuation engine.
//!
//! Once the market price leaves a concentrated liquidity range, the position
//! is held entirely in one asset: token1 below the minimum bound and token0
//! above the maximum bound. [`evaluate`] converts the raw holdings at the
//! crossed bound, adds uncollected fees and values the totals at the current
//! market price.
//!
//! The engine is a pure function over `f64`. It never fails and never
//! clamps; whatever numbers it is given are propagated to a well-defined
//! numeric result.

use crate::entities::position::PositionSnapshot;
use crate::enums::Scenario;
use crate::value_objects::valuation_result::ValuationResult;

/// Values a position under the given exit scenario.
///
/// * `Below`: token0 converts to token1 at `min_price`
///   (`token0_amount / min_price`, or `0` when `min_price <= 0`). Token0
///   keeps only its uncollected fees.
/// * `Above`: token1 converts to token0 at `max_price`
///   (`token1_amount * max_price`). Token1 keeps only its uncollected fees.
///
/// In both cases `total_value_usd = total_token0 + total_token1 * current_price`.
#[must_use]
pub fn evaluate(snapshot: &PositionSnapshot, scenario: Scenario) -> ValuationResult {
    let (total_token0, total_token1) = match scenario {
        Scenario::Below => {
            // NaN fails the comparison too, so it converts to nothing.
            let converted_token1 = if snapshot.min_price > 0.0 {
                snapshot.token0_amount / snapshot.min_price
            } else {
                0.0
            };
            (
                snapshot.uncollected_token0,
                snapshot.token1_amount + converted_token1 + snapshot.uncollected_token1,
            )
        }
        Scenario::Above => {
            let converted_token0 = snapshot.token1_amount * snapshot.max_price;
            (
                snapshot.token0_amount + converted_token0 + snapshot.uncollected_token0,
                snapshot.uncollected_token1,
            )
        }
    };

    let total_value_usd = total_token0 + total_token1 * snapshot.current_price;

    ValuationResult {
        total_token0,
        total_token1,
        total_value_usd,
        token0_symbol: snapshot.token0_symbol.clone(),
        token1_symbol: snapshot.token1_symbol.clone(),
    }
}

/// Evaluates every scenario, in [`Scenario::ALL`] order.
#[must_use]
pub fn evaluate_all(snapshot: &PositionSnapshot) -> [(Scenario, ValuationResult); 2] {
    Scenario::ALL.map(|scenario| (scenario, evaluate(snapshot, scenario)))
}

impl PositionSnapshot {
    /// Shorthand for [`evaluate`].
    #[must_use]
    pub fn evaluate(&self, scenario: Scenario) -> ValuationResult {
        evaluate(self, scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < EPSILON, "expected {expected}, got {actual}");
    }

    fn sample_snapshot() -> PositionSnapshot {
        PositionSnapshot {
            token0_amount: 1000.0,
            token1_amount: 0.5,
            token0_symbol: "USDC".to_string(),
            token1_symbol: "WETH".to_string(),
            min_price: 1000.0,
            max_price: 3000.0,
            current_price: 2000.0,
            uncollected_token0: 10.0,
            uncollected_token1: 0.05,
        }
    }

    #[test]
    fn test_below_converts_token0_at_min_price() {
        let snapshot = sample_snapshot();
        let result = evaluate(&snapshot, Scenario::Below);

        // 1000 / 1000 = 1 WETH, plus 0.5 held and 0.05 uncollected
        assert_close(result.total_token1, 1.55);
        assert_eq!(result.total_token0, 10.0);
        // 10 + 1.55 * 2000
        assert_close(result.total_value_usd, 3110.0);
        assert_eq!(result.token0_symbol, "USDC");
        assert_eq!(result.token1_symbol, "WETH");
    }

    #[test]
    fn test_below_with_zero_min_price() {
        let snapshot = PositionSnapshot {
            min_price: 0.0,
            ..sample_snapshot()
        };
        let result = evaluate(&snapshot, Scenario::Below);

        assert_close(result.total_token1, 0.55);
        assert_eq!(result.total_token0, 10.0);
        assert_close(result.total_value_usd, 1110.0);
    }

    #[test]
    fn test_below_with_negative_min_price() {
        let snapshot = PositionSnapshot {
            min_price: -500.0,
            ..sample_snapshot()
        };
        let result = evaluate(&snapshot, Scenario::Below);

        assert_close(result.total_token1, 0.55);
        assert!(result.total_value_usd.is_finite());
    }

    #[test]
    fn test_below_with_nan_min_price_converts_nothing() {
        let snapshot = PositionSnapshot {
            min_price: f64::NAN,
            ..sample_snapshot()
        };
        let result = evaluate(&snapshot, Scenario::Below);

        assert_close(result.total_token1, 0.55);
    }

    #[test]
    fn test_above_converts_token1_at_max_price() {
        let snapshot = sample_snapshot();
        let result = evaluate(&snapshot, Scenario::Above);

        // 0.5 * 3000 = 1500 USDC, plus 1000 held and 10 uncollected
        assert_close(result.total_token0, 2510.0);
        assert_eq!(result.total_token1, 0.05);
        // 2510 + 0.05 * 2000
        assert_close(result.total_value_usd, 2610.0);
        assert_eq!(result.token0_symbol, "USDC");
        assert_eq!(result.token1_symbol, "WETH");
    }

    #[test]
    fn test_above_with_zero_max_price() {
        let snapshot = PositionSnapshot {
            max_price: 0.0,
            ..sample_snapshot()
        };
        let result = evaluate(&snapshot, Scenario::Above);

        assert_close(result.total_token0, 1010.0);
        assert_eq!(result.total_token1, 0.05);
        assert_close(result.total_value_usd, 1110.0);
    }

    #[test]
    fn test_all_zero_inputs() {
        let snapshot = PositionSnapshot::default();

        for scenario in Scenario::ALL {
            let result = evaluate(&snapshot, scenario);
            assert_eq!(result.total_token0, 0.0);
            assert_eq!(result.total_token1, 0.0);
            assert_eq!(result.total_value_usd, 0.0);
        }
    }

    #[test]
    fn test_negative_inputs_are_not_clamped() {
        let snapshot = PositionSnapshot {
            token0_amount: -100.0,
            token1_amount: -0.5,
            min_price: 1000.0,
            max_price: 3000.0,
            current_price: 2000.0,
            ..PositionSnapshot::default()
        };

        let below = evaluate(&snapshot, Scenario::Below);
        // -100 / 1000 - 0.5
        assert_close(below.total_token1, -0.6);
        assert_eq!(below.total_token0, 0.0);

        let above = evaluate(&snapshot, Scenario::Above);
        // -0.5 * 3000 - 100
        assert_close(above.total_token0, -1600.0);
        assert_eq!(above.total_token1, 0.0);
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let snapshot = PositionSnapshot {
            min_price: 3000.0,
            max_price: 1000.0,
            ..sample_snapshot()
        };

        let below = evaluate(&snapshot, Scenario::Below);
        assert_close(below.total_token1, 1000.0 / 3000.0 + 0.55);

        let above = evaluate(&snapshot, Scenario::Above);
        assert_close(above.total_token0, 1000.0 + 500.0 + 10.0);
    }

    #[test]
    fn test_value_uses_current_price_not_bound() {
        let snapshot = PositionSnapshot {
            current_price: 0.0,
            ..sample_snapshot()
        };

        let below = evaluate(&snapshot, Scenario::Below);
        assert_eq!(below.total_value_usd, below.total_token0);

        let above = evaluate(&snapshot, Scenario::Above);
        assert_eq!(above.total_value_usd, above.total_token0);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let snapshot = sample_snapshot();

        for scenario in Scenario::ALL {
            let first = evaluate(&snapshot, scenario);
            let second = evaluate(&snapshot, scenario);
            assert_eq!(first, second);
            assert_eq!(first.total_value_usd.to_bits(), second.total_value_usd.to_bits());
        }
    }

    #[test]
    fn test_symbols_pass_through_untouched() {
        let snapshot = PositionSnapshot {
            token0_symbol: "  weird  sym ".to_string(),
            token1_symbol: String::new(),
            ..sample_snapshot()
        };

        for scenario in Scenario::ALL {
            let result = evaluate(&snapshot, scenario);
            assert_eq!(result.token0_symbol, snapshot.token0_symbol);
            assert_eq!(result.token1_symbol, snapshot.token1_symbol);
        }
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let snapshot = PositionSnapshot {
            token1_amount: f64::INFINITY,
            ..sample_snapshot()
        };

        let above = evaluate(&snapshot, Scenario::Above);
        assert!(above.total_token0.is_infinite());
        assert!(above.total_value_usd.is_infinite());

        // Below keeps only uncollected token0, so the infinity lands in token1.
        let below = evaluate(&snapshot, Scenario::Below);
        assert_eq!(below.total_token0, 10.0);
        assert!(below.total_token1.is_infinite());
    }

    #[test]
    fn test_evaluate_all_order() {
        let snapshot = sample_snapshot();
        let results = evaluate_all(&snapshot);

        assert_eq!(results[0].0, Scenario::Below);
        assert_eq!(results[1].0, Scenario::Above);
        assert_eq!(results[0].1, evaluate(&snapshot, Scenario::Below));
        assert_eq!(results[1].1, snapshot.evaluate(Scenario::Above));
    }
}
