//! Reactive position form.
//!
//! [`PositionForm`] owns the authoritative snapshot and scenario on behalf of
//! an interactive front end. Every edit synchronously re-runs the valuation
//! engine and replaces the previous result, so the displayed result always
//! belongs to the latest snapshot/scenario pair.

use crate::entities::position::PositionSnapshot;
use crate::enums::Scenario;
use crate::error::FormError;
use crate::input::parse_amount;
use crate::valuation::evaluate;
use crate::value_objects::valuation_result::ValuationResult;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// An editable field of [`PositionSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Token0Amount,
    Token1Amount,
    Token0Symbol,
    Token1Symbol,
    MinPrice,
    MaxPrice,
    CurrentPrice,
    UncollectedToken0,
    UncollectedToken1,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 9] = [
        Field::Token0Symbol,
        Field::Token1Symbol,
        Field::Token0Amount,
        Field::Token1Amount,
        Field::MinPrice,
        Field::MaxPrice,
        Field::CurrentPrice,
        Field::UncollectedToken0,
        Field::UncollectedToken1,
    ];

    /// The camelCase field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Field::Token0Amount => "token0Amount",
            Field::Token1Amount => "token1Amount",
            Field::Token0Symbol => "token0Symbol",
            Field::Token1Symbol => "token1Symbol",
            Field::MinPrice => "minPrice",
            Field::MaxPrice => "maxPrice",
            Field::CurrentPrice => "currentPrice",
            Field::UncollectedToken0 => "uncollectedToken0",
            Field::UncollectedToken1 => "uncollectedToken1",
        }
    }

    /// Symbol fields hold text; every other field is numeric.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Field::Token0Symbol | Field::Token1Symbol)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts the camelCase name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.trim().chars().filter(|c| *c != '_').collect();
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Holds the current inputs and the result computed from them.
#[derive(Debug, Clone)]
pub struct PositionForm {
    snapshot: PositionSnapshot,
    scenario: Scenario,
    result: ValuationResult,
    revision: u64,
}

impl PositionForm {
    /// Creates a form and computes its first result.
    pub fn new(snapshot: PositionSnapshot, scenario: Scenario) -> Self {
        let result = evaluate(&snapshot, scenario);
        Self {
            snapshot,
            scenario,
            result,
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> &PositionSnapshot {
        &self.snapshot
    }

    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Result for the current snapshot and scenario.
    pub fn result(&self) -> &ValuationResult {
        &self.result
    }

    /// Number of edits applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Writes raw text into a field and recomputes.
    ///
    /// Symbols are stored verbatim. Numeric text goes through
    /// [`parse_amount`], so unusable input becomes `0`.
    pub fn set_field(&mut self, field: Field, raw: &str) -> &ValuationResult {
        let snapshot = &mut self.snapshot;
        match field {
            Field::Token0Symbol => snapshot.token0_symbol = raw.to_string(),
            Field::Token1Symbol => snapshot.token1_symbol = raw.to_string(),
            Field::Token0Amount => snapshot.token0_amount = parse_amount(raw),
            Field::Token1Amount => snapshot.token1_amount = parse_amount(raw),
            Field::MinPrice => snapshot.min_price = parse_amount(raw),
            Field::MaxPrice => snapshot.max_price = parse_amount(raw),
            Field::CurrentPrice => snapshot.current_price = parse_amount(raw),
            Field::UncollectedToken0 => snapshot.uncollected_token0 = parse_amount(raw),
            Field::UncollectedToken1 => snapshot.uncollected_token1 = parse_amount(raw),
        }
        debug!(field = %field, raw, "Form field updated");
        self.recompute()
    }

    /// Like [`PositionForm::set_field`], resolving the field by name.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when `name` is not a field; the
    /// form is left untouched.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<&ValuationResult, FormError> {
        let field = name.parse::<Field>()?;
        Ok(self.set_field(field, raw))
    }

    /// Switches scenario and recomputes.
    pub fn set_scenario(&mut self, scenario: Scenario) -> &ValuationResult {
        self.scenario = scenario;
        debug!(scenario = %scenario, "Form scenario updated");
        self.recompute()
    }

    /// Replaces the whole snapshot and recomputes.
    pub fn replace_snapshot(&mut self, snapshot: PositionSnapshot) -> &ValuationResult {
        self.snapshot = snapshot;
        self.recompute()
    }

    fn recompute(&mut self) -> &ValuationResult {
        self.result = evaluate(&self.snapshot, self.scenario);
        self.revision += 1;
        &self.result
    }
}

impl Default for PositionForm {
    fn default() -> Self {
        Self::new(PositionSnapshot::default(), Scenario::Below)
    }
}
