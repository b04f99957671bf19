pub mod position;

// Re-export for easier access
pub use position::PositionSnapshot;
