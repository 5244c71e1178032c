//! I/O modules for demo content generation.

pub mod row_generator;

// Re-export commonly used types
pub use row_generator::{generate_rows, FeedRow};
