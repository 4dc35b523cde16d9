//! The mutable weighted directed graph contract.

use std::collections::{HashMap, HashSet};

use super::{Edge, Label, Weight};
use crate::error::Result;

/// A mutable weighted directed graph with labeled vertices.
///
/// At most one edge exists per ordered `(source, target)` pair and every stored
/// weight is strictly positive. Self-loops are ordinary edges.
///
/// Every query returns an owned snapshot: later mutation of the graph never
/// changes a value that was already handed out.
///
/// Unknown vertices are not errors. `remove` on one returns `false`, and
/// `sources`/`targets` on one return an empty map.
pub trait WeightedDigraph<V: Label> {
    /// Adds `vertex` if it is not already present.
    ///
    /// Returns `true` if the vertex was newly added. No edges are affected.
    fn add(&mut self, vertex: V) -> bool;

    /// Creates, updates or deletes the edge `source -> target`.
    ///
    /// Missing endpoints are added as vertices first, even when `weight` is `0`
    /// and no edge ends up stored. A positive `weight` creates the edge or
    /// replaces its weight; `0` deletes it.
    ///
    /// Returns the weight the edge had before the call, or `0` if it did not
    /// exist.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeight`](crate::GraphError::NegativeWeight)
    /// if `weight < 0`. The graph is not modified in that case.
    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight>;

    /// Removes `vertex` along with every edge into or out of it.
    ///
    /// Returns `false` without modifying the graph if the vertex is absent.
    fn remove(&mut self, vertex: &V) -> bool;

    /// Snapshot of all vertex labels.
    fn vertices(&self) -> HashSet<V>;

    /// Snapshot of the incoming edges of `target`, keyed by source.
    fn sources(&self, target: &V) -> HashMap<V, Weight>;

    /// Snapshot of the outgoing edges of `source`, keyed by target.
    fn targets(&self, source: &V) -> HashMap<V, Weight>;

    /// Snapshot of every stored edge, in no particular order.
    fn edges(&self) -> Vec<Edge<V>>;

    /// Returns `true` if `vertex` is in the graph.
    fn contains(&self, vertex: &V) -> bool;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of stored edges.
    fn edge_count(&self) -> usize;

    /// Weight of `source -> target`, or `0` if there is no such edge.
    fn weight(&self, source: &V, target: &V) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// Checks the representation invariants.
    ///
    /// Holds after every public operation: all edge endpoints are vertices,
    /// every stored weight is positive, and no `(source, target)` pair is
    /// stored twice. Mutations assert this in debug builds.
    fn check_invariants(&self) -> bool;
}
