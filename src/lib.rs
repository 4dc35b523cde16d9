//! # `wdgraph` - Mutable Weighted Directed Graphs
//!
//! An in-memory, weighted, directed graph over opaque vertex labels, with two
//! interchangeable layouts behind one trait.
//!
//! ## Contract
//!
//! - **Vertices** are any `Clone + Eq + Hash + Debug` label ([`Label`]).
//! - **Edges** are directed and carry a strictly positive [`Weight`]. There is
//!   at most one edge per ordered `(source, target)` pair; self-loops are
//!   allowed.
//! - **`set` is the only edge operation**: a positive weight creates or
//!   replaces the edge, `0` deletes it, and the previous weight (or `0`) is
//!   returned. Negative weights are rejected with [`GraphError::NegativeWeight`]
//!   before anything changes.
//! - **Queries return snapshots**. `vertices`, `sources`, `targets` and
//!   `edges` hand back owned collections that later mutation cannot touch.
//! - **Unknown vertices are not errors**: they simply have no edges.
//!
//! ## Representations
//!
//! | Layout | Storage | Cheap | Expensive |
//! |--------|---------|-------|-----------|
//! | [`EdgeListGraph`] | vertex set + flat edge list | `add`, full edge scans | `set`, `sources`, `targets` are \(O(m)\) |
//! | [`AdjacencyGraph`] | vertex records owning outgoing maps | `set`, `targets` | `sources`, `remove` are \(O(n)\) |
//!
//! ### Invariants
//!
//! After every public operation:
//! 1. every edge endpoint is a vertex of the graph;
//! 2. every stored weight is `> 0`;
//! 3. no `(source, target)` pair is stored twice.
//!
//! Mutations assert these in builds with `debug_assertions`; release builds
//! skip the check.
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `tracing` events for every mutation and rejected call.
//!
//! ## Example
//!
//! ```rust
//! use wdgraph::{Representation, WeightedDigraph};
//!
//! let mut g = Representation::EdgeList.empty::<&str>();
//! assert_eq!(g.set("A", "B", 5), Ok(0));
//! assert_eq!(g.sources(&"B").get("A"), Some(&5));
//!
//! // Weight 0 deletes the edge and reports what it was.
//! assert_eq!(g.set("A", "B", 0), Ok(5));
//! assert!(g.targets(&"A").is_empty());
//!
//! assert!(g.remove(&"A"));
//! assert_eq!(g.vertex_count(), 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyGraph, Edge, EdgeListGraph, Label, Representation, Weight, WeightedDigraph};
