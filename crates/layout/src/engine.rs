use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use journey_core::catalog::Catalog;
use journey_core::config::LayoutConfig;
use journey_core::error::{JourneyError, JourneyResult};
use journey_core::types::Step;

use crate::diagram::{Diagram, Edge, Node, Position};

/// Computes node positions and the derived edge chain for one role-filter
/// snapshot. The engine holds no state beyond the catalog and geometry; each
/// call reads the filter set, computes, and retains nothing.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    catalog: Arc<Catalog>,
    geometry: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(catalog: Arc<Catalog>, geometry: LayoutConfig) -> Self {
        Self { catalog, geometry }
    }

    /// Computes the diagram for the given set of active role ids.
    ///
    /// Steps whose role is not active are dropped; an empty set yields an
    /// empty diagram. Nodes follow step declaration order. Edges connect
    /// consecutive steps of the visible set sorted by (lane, phase column),
    /// one single global chain — the chain deliberately crosses lane
    /// boundaries, linking the last step of one lane to the first step of
    /// the next.
    ///
    /// Output is deterministic: the same catalog, geometry, and filter set
    /// always produce identical nodes and edges.
    pub fn compute(&self, active_roles: &HashSet<String>) -> JourneyResult<Diagram> {
        let visible: Vec<Placed<'_>> = self
            .catalog
            .steps()
            .iter()
            .filter(|step| active_roles.contains(&step.role))
            .map(|step| self.place(step))
            .collect::<JourneyResult<_>>()?;

        let nodes = visible
            .iter()
            .map(|placed| {
                // place() already resolved both indexes, so the id lookups
                // cannot miss here.
                let role = self.catalog.roles()[placed.role_index].clone();
                let phase = self.catalog.phases()[placed.phase_index].clone();
                Node {
                    id: placed.step.id.clone(),
                    position: Position {
                        x: self.geometry.pad_x + placed.phase_index as f64 * self.geometry.phase_gap,
                        y: self.geometry.pad_y + placed.role_index as f64 * self.geometry.lane_height,
                    },
                    step: placed.step.clone(),
                    role,
                    phase,
                }
            })
            .collect();

        let mut ordered = visible;
        ordered.sort_by_key(|placed| (placed.role_index, placed.phase_index));

        let edges = ordered
            .windows(2)
            .map(|pair| {
                let (source, target) = (&pair[0], &pair[1]);
                Edge {
                    id: format!("e-{}-{}", source.step.id, target.step.id),
                    source: source.step.id.clone(),
                    target: target.step.id.clone(),
                    animated: target.phase_index >= source.phase_index,
                }
            })
            .collect();

        let diagram = Diagram { nodes, edges };
        debug!(
            active_roles = active_roles.len(),
            nodes = diagram.nodes.len(),
            edges = diagram.edges.len(),
            "Layout computed"
        );
        Ok(diagram)
    }

    /// Resolves a step's lane and column indexes. A miss means the step was
    /// never validated against this catalog.
    fn place<'a>(&self, step: &'a Step) -> JourneyResult<Placed<'a>> {
        let role_index = self.catalog.role_index(&step.role).ok_or_else(|| {
            JourneyError::Validation(format!(
                "Step {} references unknown role {}",
                step.id, step.role
            ))
        })?;
        let phase_index = self.catalog.phase_index(&step.phase).ok_or_else(|| {
            JourneyError::Validation(format!(
                "Step {} references unknown phase {}",
                step.id, step.phase
            ))
        })?;
        Ok(Placed {
            step,
            role_index,
            phase_index,
        })
    }
}

/// A visible step resolved to its lane and column indexes.
#[derive(Debug, Clone, Copy)]
struct Placed<'a> {
    step: &'a Step,
    role_index: usize,
    phase_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    use journey_core::types::{Phase, Role};

    fn catalog(phases: &[(&str, &str)], roles: &[(&str, &str)], steps: Vec<Step>) -> Arc<Catalog> {
        let phases = phases
            .iter()
            .map(|(id, name)| Phase {
                id: id.to_string(),
                name: name.to_string(),
                color: "#000".to_string(),
            })
            .collect();
        let roles = roles
            .iter()
            .enumerate()
            .map(|(lane, (id, name))| Role {
                id: id.to_string(),
                name: name.to_string(),
                lane,
                color: "#000".to_string(),
            })
            .collect();
        Arc::new(Catalog::new(phases, roles, steps).unwrap())
    }

    fn two_lane_catalog() -> Arc<Catalog> {
        catalog(
            &[("a", "Alpha"), ("b", "Beta"), ("c", "Gamma")],
            &[("R1", "One"), ("R2", "Two")],
            vec![
                Step::new("s1", "R1", "a", "R1 first", ""),
                Step::new("s2", "R1", "c", "R1 last", ""),
                Step::new("s3", "R2", "b", "R2 only", ""),
            ],
        )
    }

    fn all_roles(catalog: &Catalog) -> HashSet<String> {
        catalog.roles().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_positions_follow_grid() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());

        let diagram = engine.compute(&all_roles(&catalog)).unwrap();
        assert_eq!(diagram.nodes.len(), 3);

        // s2 sits in phase column 2, lane 0.
        let s2 = diagram.nodes.iter().find(|n| n.id == "s2").unwrap();
        assert_eq!(s2.position, Position { x: 160.0 + 2.0 * 240.0, y: 80.0 });
        // s3 sits in phase column 1, lane 1.
        let s3 = diagram.nodes.iter().find(|n| n.id == "s3").unwrap();
        assert_eq!(s3.position, Position { x: 160.0 + 240.0, y: 80.0 + 120.0 });
        assert_eq!(s3.role.name, "Two");
        assert_eq!(s3.phase.name, "Beta");
    }

    #[test]
    fn test_custom_geometry() {
        let catalog = two_lane_catalog();
        let geometry = LayoutConfig {
            pad_x: 10.0,
            pad_y: 20.0,
            phase_gap: 100.0,
            lane_height: 50.0,
        };
        let engine = LayoutEngine::new(catalog.clone(), geometry);

        let diagram = engine.compute(&all_roles(&catalog)).unwrap();
        let s3 = diagram.nodes.iter().find(|n| n.id == "s3").unwrap();
        assert_eq!(s3.position, Position { x: 110.0, y: 70.0 });
    }

    #[test]
    fn test_empty_filter_yields_empty_diagram() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog, LayoutConfig::default());

        let diagram = engine.compute(&HashSet::new()).unwrap();
        assert!(diagram.nodes.is_empty());
        assert!(diagram.edges.is_empty());
    }

    #[test]
    fn test_edge_count_is_visible_minus_one() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());

        let full = engine.compute(&all_roles(&catalog)).unwrap();
        assert_eq!(full.edges.len(), 2);

        let only_r2: HashSet<String> = ["R2".to_string()].into_iter().collect();
        let single = engine.compute(&only_r2).unwrap();
        assert_eq!(single.nodes.len(), 1);
        assert!(single.edges.is_empty());
    }

    #[test]
    fn test_chain_crosses_lane_boundary() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());

        let diagram = engine.compute(&all_roles(&catalog)).unwrap();
        // Sorted by (lane, column): s1, s2, s3. The second edge jumps from
        // the end of lane 0 to lane 1.
        assert_eq!(diagram.edges[0].id, "e-s1-s2");
        assert_eq!(diagram.edges[1].id, "e-s2-s3");
    }

    #[test]
    fn test_animated_only_when_phase_does_not_regress() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());

        let diagram = engine.compute(&all_roles(&catalog)).unwrap();
        // a -> c moves forward in phase order.
        assert!(diagram.edges[0].animated);
        // c -> b (cross-lane) goes backward, so it is not animated.
        assert!(!diagram.edges[1].animated);
    }

    #[test]
    fn test_same_phase_edge_is_animated() {
        let catalog = catalog(
            &[("a", "Alpha")],
            &[("R1", "One")],
            vec![
                Step::new("s1", "R1", "a", "First", ""),
                Step::new("s2", "R1", "a", "Second", ""),
            ],
        );
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());

        let diagram = engine.compute(&all_roles(&catalog)).unwrap();
        assert_eq!(diagram.edges.len(), 1);
        assert!(diagram.edges[0].animated);
    }

    #[test]
    fn test_deterministic_output() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());
        let active = all_roles(&catalog);

        let first = engine.compute(&active).unwrap();
        let second = engine.compute(&active).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_round_trip_restores_layout() {
        let catalog = two_lane_catalog();
        let engine = LayoutEngine::new(catalog.clone(), LayoutConfig::default());
        let active = all_roles(&catalog);

        let before = engine.compute(&active).unwrap();

        let mut toggled = active.clone();
        toggled.remove("R2");
        let narrowed = engine.compute(&toggled).unwrap();
        assert_eq!(narrowed.nodes.len(), 2);

        let after = engine.compute(&active).unwrap();
        assert_eq!(before, after);
    }
}
