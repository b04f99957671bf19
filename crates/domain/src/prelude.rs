//! Prelude module for convenient imports.
//!
//! ```rust
//! use clmm_exit_domain::prelude::*;
//! ```

pub use crate::entities::PositionSnapshot;
pub use crate::enums::Scenario;
pub use crate::error::{FormError, InputError, ParseScenarioError};
pub use crate::form::{Field, PositionForm};
pub use crate::input::{parse_amount, parse_strict};
pub use crate::report::{DisplayLines, ValuationReport, format_fixed};
pub use crate::valuation::{evaluate, evaluate_all};
pub use crate::value_objects::{PriceRange, ValuationResult};
