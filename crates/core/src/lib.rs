//! Core data model for the JourneyBoard diagram: the immutable catalog of
//! phases, roles, and steps, plus configuration and error types shared by
//! the layout and event crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use config::{AppConfig, LayoutConfig};
pub use error::{JourneyError, JourneyResult};
