//! Weighted directed edge values.

use core::fmt;

use super::{Label, Weight};
use crate::error::{GraphError, Result};

/// An immutable directed edge with a strictly positive weight.
///
/// `Edge` is a value, not a handle: it is what [`EdgeListGraph`] stores and
/// what [`WeightedDigraph::edges`] hands back, but holding one does not tie
/// it to any graph.
///
/// [`EdgeListGraph`]: super::EdgeListGraph
/// [`WeightedDigraph::edges`]: super::WeightedDigraph::edges
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    source: V,
    target: V,
    weight: Weight,
}

impl<V: Label> Edge<V> {
    /// Creates an edge `source -> target` with the given weight.
    ///
    /// # Errors
    /// Returns [`GraphError::NonPositiveWeight`] if `weight <= 0`.
    pub fn new(source: V, target: V, weight: Weight) -> Result<Self> {
        if weight <= 0 {
            return Err(GraphError::NonPositiveWeight(weight));
        }
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// Builds an edge whose weight the caller has already checked.
    pub(crate) fn new_unchecked(source: V, target: V, weight: Weight) -> Self {
        debug_assert!(weight > 0, "edge weight must be positive, got {weight}");
        Self {
            source,
            target,
            weight,
        }
    }

    /// The tail of the edge.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// The head of the edge.
    pub fn target(&self) -> &V {
        &self.target
    }

    /// The edge weight, always `> 0`.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns `true` if this edge goes from `source` to `target`.
    pub fn connects(&self, source: &V, target: &V) -> bool {
        self.source == *source && self.target == *target
    }

    /// Returns `true` if `vertex` is either endpoint.
    pub fn touches(&self, vertex: &V) -> bool {
        self.source == *vertex || self.target == *vertex
    }

    /// Returns `true` for a self-loop.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Replaces the weight in place. Only graph code may do this.
    pub(crate) fn set_weight(&mut self, weight: Weight) {
        debug_assert!(weight > 0, "edge weight must be positive, got {weight}");
        self.weight = weight;
    }

    /// Splits the edge into `(source, target, weight)`.
    pub fn into_parts(self) -> (V, V, Weight) {
        (self.source, self.target, self.weight)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
