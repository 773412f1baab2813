use serde::{Deserialize, Serialize};

use journey_core::types::{Phase, Role, Step};

/// Grid coordinate of a node, in renderer units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A positioned step, carrying the resolved role and phase so renderers need
/// no catalog lookups of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    pub step: Step,
    pub role: Role,
    pub phase: Phase,
}

/// A directed edge between two consecutive steps in the journey chain.
///
/// `animated` marks edges that do not go backward in phase order; renderers
/// draw these as progressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
}

/// The full layout output for one role-filter snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
