pub mod price_range;
pub mod valuation_result;

pub use price_range::PriceRange;
pub use valuation_result::ValuationResult;
