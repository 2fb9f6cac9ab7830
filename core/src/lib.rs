//! Dashboard data export for the player segmentation analytics database.
//!
//! Reads the pre-computed segmentation views and materialises three JSON
//! documents for the static dashboards.

pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod performance_comparison;
pub mod persona_deepdive;
pub mod segment_overview;
pub mod store;
pub mod types;
