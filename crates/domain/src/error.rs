//! Error types for the domain crate.
//!
//! The valuation engine itself is total and has no error type. These errors
//! come from the text-facing edges: scenario names, strict numeric input and
//! form field names.

use thiserror::Error;

/// A scenario name that is neither `below` nor `above`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scenario '{0}', expected 'below' or 'above'")]
pub struct ParseScenarioError(pub String);

/// Strict numeric input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing but whitespace was supplied.
    #[error("empty numeric input")]
    Empty,
    /// The text is not a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The text parsed, but to NaN or an infinity.
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Errors raised by [`crate::form::PositionForm`] callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field name does not match any snapshot field.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}
