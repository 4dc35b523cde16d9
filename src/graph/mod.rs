//! Weighted directed graphs over opaque vertex labels.
//!
//! Two layouts implement the same [`WeightedDigraph`] contract:
//! - [`EdgeListGraph`]: a vertex set plus a flat list of edge records
//! - [`AdjacencyGraph`]: vertex records that each own their outgoing edges
//!
//! Both are observably identical; they differ only in memory layout and in the
//! cost of each operation. Pick one at construction time, either directly or
//! through [`Representation`].

pub mod adjacency;
pub mod edge;
pub mod edge_list;
pub(crate) mod invariants;
pub mod traits;

use core::fmt::Debug;
use core::hash::Hash;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;
pub use traits::WeightedDigraph;

/// Edge weight.
///
/// Stored weights are always strictly positive. `0` means "no edge" and is
/// never stored; negative values are rejected at the API boundary.
pub type Weight = i32;

/// Bound satisfied by every usable vertex label.
///
/// Labels are opaque: the graph only clones, hashes and compares them.
/// `Debug` is required so mutations can be logged.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}

/// Selects a graph layout at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// Vertex set plus a flat edge list. See [`EdgeListGraph`].
    EdgeList,
    /// Per-vertex outgoing adjacency maps. See [`AdjacencyGraph`].
    #[default]
    Adjacency,
}

impl Representation {
    /// All available layouts.
    pub const ALL: [Representation; 2] = [Representation::EdgeList, Representation::Adjacency];

    /// Creates an empty graph using this layout.
    pub fn empty<V: Label + 'static>(self) -> Box<dyn WeightedDigraph<V>> {
        match self {
            Representation::EdgeList => Box::new(EdgeListGraph::new()),
            Representation::Adjacency => Box::new(AdjacencyGraph::new()),
        }
    }

    /// Short human-readable name, used in benchmark ids and reports.
    pub fn name(self) -> &'static str {
        match self {
            Representation::EdgeList => "edge_list",
            Representation::Adjacency => "adjacency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representation_builds_empty_graphs() {
        for repr in Representation::ALL {
            let mut g = repr.empty::<&str>();
            assert!(g.vertices().is_empty(), "{} not empty", repr.name());
            assert_eq!(g.set("a", "b", 2), Ok(0));
            assert_eq!(g.weight(&"a", &"b"), 2);
        }
    }

    #[test]
    fn default_is_adjacency() {
        assert_eq!(Representation::default(), Representation::Adjacency);
    }
}
