//! Domain model and valuation engine for out-of-range CLMM positions.
//!
//! A concentrated liquidity position whose range has been exited is held
//! entirely in one asset. This crate values such a position:
//! - `entities` / `value_objects`: the snapshot, range and result types
//! - `valuation`: the pure valuation engine
//! - `form`: a reactive form that re-evaluates on every edit
//! - `input` / `report`: numeric parsing and result rendering
//!
//! # Example
//!
//! ```rust
//! use clmm_exit_domain::prelude::*;
//!
//! let snapshot = PositionSnapshot {
//!     token0_amount: 1000.0,
//!     token1_amount: 0.5,
//!     min_price: 1000.0,
//!     max_price: 3000.0,
//!     current_price: 2000.0,
//!     ..PositionSnapshot::default()
//! };
//!
//! let result = evaluate(&snapshot, Scenario::Above);
//! assert_eq!(result.total_token0, 2500.0);
//! assert_eq!(result.total_token1, 0.0);
//! ```

/// Prelude module for convenient imports.
pub mod prelude;

/// Position snapshot.
pub mod entities;
/// Enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// Reactive position form.
pub mod form;
/// Numeric input parsing.
pub mod input;
/// Result rendering.
pub mod report;
/// Valuation engine.
pub mod valuation;
/// Value objects.
pub mod value_objects;
