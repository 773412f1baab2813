//! Layout engine — turns the journey catalog plus a role-visibility filter
//! into positioned nodes and a derived sequential edge chain.

pub mod diagram;
pub mod engine;

pub use diagram::{Diagram, Edge, Node, Position};
pub use engine::LayoutEngine;
