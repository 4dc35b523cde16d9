//! A vertex-centric weighted directed graph.
//!
//! Each vertex record owns a map from target label to weight, i.e. its
//! outgoing adjacency. Records sit in a dense `Vec` with a label index beside
//! it, so outgoing edges are a single lookup away while incoming edges require
//! a pass over every record.

use core::fmt;
use std::collections::{HashMap, HashSet};

use super::invariants::edges_well_formed;
use super::{Edge, Label, Weight, WeightedDigraph};
use crate::error::{GraphError, Result};

/// A vertex and its outgoing edges.
#[derive(Debug, Clone)]
struct VertexRecord<V> {
    label: V,
    targets: HashMap<V, Weight>,
}

impl<V: Label> VertexRecord<V> {
    fn new(label: V) -> Self {
        Self {
            label,
            targets: HashMap::new(),
        }
    }

    /// Writes the edge to `target`, deleting it when `weight == 0`.
    ///
    /// Returns the previous weight, `0` if there was no edge.
    fn set_target(&mut self, target: V, weight: Weight) -> Weight {
        let previous = if weight == 0 {
            self.targets.remove(&target)
        } else {
            self.targets.insert(target, weight)
        };
        previous.unwrap_or(0)
    }

    fn remove_target(&mut self, target: &V) -> Option<Weight> {
        self.targets.remove(target)
    }

    fn weight_to(&self, target: &V) -> Option<Weight> {
        self.targets.get(target).copied()
    }
}

/// A weighted directed graph stored as per-vertex outgoing adjacency maps.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add` | \(O(1)\) amortized | Appends a record with empty adjacency |
/// | `set` | \(O(1)\) average | Writes into the source record's map |
/// | `remove` | \(O(n)\) | Drops the record, then purges it from every other map |
/// | `sources` | \(O(n)\) | Incoming edges are not indexed; probes every record |
/// | `targets` | \(O(\text{out-degree})\) | Copies one record's map |
/// | `edges` | \(O(n + m)\) | Flattens all maps |
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    records: Vec<VertexRecord<V>>,
    index: HashMap<V, usize>,
}

impl<V: Label> AdjacencyGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` records.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            records: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    /// Out-degree of `vertex`, `0` if it is unknown.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.record(vertex).map_or(0, |r| r.targets.len())
    }

    /// In-degree of `vertex`, `0` if it is unknown.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.records
            .iter()
            .filter(|r| r.targets.contains_key(vertex))
            .count()
    }

    fn record(&self, vertex: &V) -> Option<&VertexRecord<V>> {
        self.index.get(vertex).map(|&idx| &self.records[idx])
    }

    /// Returns the record slot for `vertex`, creating an empty record if needed.
    fn slot(&mut self, vertex: &V) -> usize {
        if let Some(&idx) = self.index.get(vertex) {
            return idx;
        }
        let idx = self.records.len();
        self.records.push(VertexRecord::new(vertex.clone()));
        self.index.insert(vertex.clone(), idx);
        graph_trace!(?vertex, "vertex added");
        idx
    }

    fn index_consistent(&self) -> bool {
        self.index.len() == self.records.len()
            && self
                .records
                .iter()
                .enumerate()
                .all(|(idx, r)| self.index.get(&r.label) == Some(&idx))
    }
}

impl<V: Label> WeightedDigraph<V> for AdjacencyGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.slot(&vertex);
        debug_assert!(self.check_invariants(), "representation invariant violated after add");
        true
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            graph_debug!(?source, ?target, weight, "rejected negative weight");
            return Err(GraphError::NegativeWeight(weight));
        }

        let src = self.slot(&source);
        self.slot(&target);

        graph_trace!(?source, ?target, weight, "edge set");
        let previous = self.records[src].set_target(target, weight);

        debug_assert!(self.check_invariants(), "representation invariant violated after set");
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        let Some(idx) = self.index.remove(vertex) else {
            return false;
        };

        // Outgoing edges go with the record. The last record moves into `idx`.
        self.records.swap_remove(idx);
        if let Some(moved) = self.records.get(idx) {
            self.index.insert(moved.label.clone(), idx);
        }

        for record in &mut self.records {
            record.remove_target(vertex);
        }
        graph_trace!(?vertex, "vertex removed");

        debug_assert!(self.check_invariants(), "representation invariant violated after remove");
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.records.iter().map(|r| r.label.clone()).collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.records
            .iter()
            .filter_map(|r| r.weight_to(target).map(|w| (r.label.clone(), w)))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.record(source)
            .map(|r| r.targets.clone())
            .unwrap_or_default()
    }

    fn edges(&self) -> Vec<Edge<V>> {
        self.records
            .iter()
            .flat_map(|r| {
                r.targets
                    .iter()
                    .map(|(t, &w)| Edge::new_unchecked(r.label.clone(), t.clone(), w))
            })
            .collect()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.records.len()
    }

    fn edge_count(&self) -> usize {
        self.records.iter().map(|r| r.targets.len()).sum()
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        self.record(source)
            .and_then(|r| r.weight_to(target))
            .unwrap_or(0)
    }

    fn check_invariants(&self) -> bool {
        if !self.index_consistent() {
            graph_debug!("label index out of sync with vertex records");
            return false;
        }
        edges_well_formed(
            |v| self.index.contains_key(v),
            self.records
                .iter()
                .flat_map(|r| r.targets.iter().map(move |(t, &w)| (&r.label, t, w))),
        )
    }
}

impl<V: Label> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label> Extend<Edge<V>> for AdjacencyGraph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            let (source, target, weight) = edge.into_parts();
            // Edge weights are positive, so `set` cannot reject them.
            let _ = self.set(source, target, weight);
        }
    }
}

impl<V: Label + fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.records {
            write!(f, "{} -> {{", r.label)?;
            for (i, (t, w)) in r.targets.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{t}: {w}")?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
