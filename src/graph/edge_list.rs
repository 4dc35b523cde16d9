//! An edge-list weighted directed graph.
//!
//! Vertices live in a hash set and edges in a flat `Vec<Edge<V>>`. Finding an
//! edge or a vertex's adjacency means scanning the whole list, so this layout
//! suits workloads that walk all edges wholesale more often than they look up
//! the neighbors of a single vertex.

use core::fmt;
use std::collections::{HashMap, HashSet};

use super::invariants::edges_well_formed;
use super::{Edge, Label, Weight, WeightedDigraph};
use crate::error::{GraphError, Result};

/// A weighted directed graph stored as a vertex set plus a flat edge list.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add` | \(O(1)\) amortized | Hash set insert |
/// | `set` | \(O(m)\) | Linear scan for an existing `(source, target)` record |
/// | `remove` | \(O(m)\) | Filters every incident edge out of the list |
/// | `sources` | \(O(m)\) | Scans all edges |
/// | `targets` | \(O(m)\) | Scans all edges |
/// | `edges` | \(O(m)\) | Clones the list |
#[derive(Clone, Debug)]
pub struct EdgeListGraph<V> {
    vertices: HashSet<V>,
    edges: Vec<Edge<V>>,
}

impl<V: Label> EdgeListGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashSet::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` labels and `edges` edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: HashSet::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Position of the `source -> target` record, if any.
    fn position(&self, source: &V, target: &V) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    /// Adds `vertex` if absent and reports whether it was added.
    fn ensure_vertex(&mut self, vertex: &V) -> bool {
        if self.vertices.contains(vertex) {
            return false;
        }
        self.vertices.insert(vertex.clone());
        graph_trace!(?vertex, "vertex added");
        true
    }
}

impl<V: Label> WeightedDigraph<V> for EdgeListGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        let added = self.ensure_vertex(&vertex);
        debug_assert!(self.check_invariants(), "representation invariant violated after add");
        added
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            graph_debug!(?source, ?target, weight, "rejected negative weight");
            return Err(GraphError::NegativeWeight(weight));
        }

        self.ensure_vertex(&source);
        self.ensure_vertex(&target);

        let previous = match self.position(&source, &target) {
            Some(idx) => {
                let previous = self.edges[idx].weight();
                if weight > 0 {
                    self.edges[idx].set_weight(weight);
                    graph_trace!(?source, ?target, previous, weight, "edge updated");
                } else {
                    self.edges.remove(idx);
                    graph_trace!(?source, ?target, previous, "edge deleted");
                }
                previous
            }
            None => {
                if weight > 0 {
                    graph_trace!(?source, ?target, weight, "edge created");
                    self.edges.push(Edge::new_unchecked(source, target, weight));
                }
                0
            }
        };

        debug_assert!(self.check_invariants(), "representation invariant violated after set");
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.remove(vertex) {
            return false;
        }
        self.edges.retain(|e| !e.touches(vertex));
        graph_trace!(?vertex, "vertex removed");

        debug_assert!(self.check_invariants(), "representation invariant violated after remove");
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.clone()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn edges(&self) -> Vec<Edge<V>> {
        self.edges.clone()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        self.position(source, target)
            .map_or(0, |idx| self.edges[idx].weight())
    }

    fn check_invariants(&self) -> bool {
        edges_well_formed(
            |v| self.vertices.contains(v),
            self.edges.iter().map(|e| (e.source(), e.target(), e.weight())),
        )
    }
}

impl<V: Label> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> Extend<Edge<V>> for EdgeListGraph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            let (source, target, weight) = edge.into_parts();
            // Edge weights are positive, so `set` cannot reject them.
            let _ = self.set(source, target, weight);
        }
    }
}

impl<V: Label + fmt::Display> fmt::Display for EdgeListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Edges:")?;
        for e in &self.edges {
            writeln!(f, "  {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_set_replaces_in_place() {
        let mut g = EdgeListGraph::new();
        g.set("a", "b", 1).unwrap();
        g.set("a", "c", 2).unwrap();
        assert_eq!(g.set("a", "b", 9), Ok(1));

        assert_eq!(g.edge_count(), 2);
        // Updated record keeps its slot.
        assert_eq!(g.edges()[0], Edge::new("a", "b", 9).unwrap());
    }

    #[test]
    fn edge_list_zero_weight_excises_record() {
        let mut g = EdgeListGraph::new();
        g.set("a", "b", 1).unwrap();
        g.set("b", "c", 2).unwrap();
        assert_eq!(g.set("a", "b", 0), Ok(1));
        assert_eq!(g.edges(), vec![Edge::new("b", "c", 2).unwrap()]);
    }

    #[test]
    fn edge_list_remove_filters_both_directions() {
        let mut g = EdgeListGraph::new();
        g.set("a", "b", 1).unwrap();
        g.set("b", "c", 2).unwrap();
        g.set("c", "a", 3).unwrap();
        g.set("b", "b", 4).unwrap();

        assert!(g.remove(&"b"));
        assert_eq!(g.edges(), vec![Edge::new("c", "a", 3).unwrap()]);
        assert!(g.check_invariants());
    }

    #[test]
    fn edge_list_negative_weight_leaves_graph_untouched() {
        let mut g: EdgeListGraph<&str> = EdgeListGraph::with_capacity(4, 4);
        assert_eq!(g.set("a", "b", -1), Err(GraphError::NegativeWeight(-1)));
        assert_eq!(g.vertex_count(), 0);
    }

    #[test]
    fn edge_list_display_lists_vertices_then_edges() {
        let mut g = EdgeListGraph::new();
        g.set("A", "B", 5).unwrap();
        g.remove(&"B");
        g.set("A", "A", 2).unwrap();
        assert_eq!(g.to_string(), "Vertices: [A]\nEdges:\n  A -> A (2)\n");
    }

    #[test]
    fn edge_list_extend_loads_edges() {
        let mut g = EdgeListGraph::new();
        g.extend([
            Edge::new(1, 2, 3).unwrap(),
            Edge::new(2, 3, 4).unwrap(),
            Edge::new(1, 2, 6).unwrap(),
        ]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(&1, &2), 6);
    }
}
