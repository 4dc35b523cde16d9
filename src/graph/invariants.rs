//! Representation invariant checks shared by both graph layouts.
//!
//! Each layout flattens its state into a membership test plus a stream of
//! `(source, target, weight)` triples; the checks here only see that view.
//! Mutating operations run them under `debug_assert!`, so release builds
//! never pay for them.

use std::collections::HashSet;

use super::{Label, Weight};

/// Verifies that every edge has endpoints in the graph, a positive weight, and
/// a `(source, target)` pair no other edge uses.
pub(crate) fn edges_well_formed<'a, V, F, I>(is_vertex: F, edges: I) -> bool
where
    V: Label + 'a,
    F: Fn(&V) -> bool,
    I: IntoIterator<Item = (&'a V, &'a V, Weight)>,
{
    let mut seen: HashSet<(&V, &V)> = HashSet::new();
    for (source, target, weight) in edges {
        if !is_vertex(source) || !is_vertex(target) {
            graph_debug!(?source, ?target, "edge endpoint is not a vertex");
            return false;
        }
        if weight <= 0 {
            graph_debug!(?source, ?target, weight, "stored edge weight is not positive");
            return false;
        }
        if !seen.insert((source, target)) {
            graph_debug!(?source, ?target, "duplicate edge");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(vertices: &[u8], edges: &[(u8, u8, Weight)]) -> bool {
        edges_well_formed(
            |v: &u8| vertices.contains(v),
            edges.iter().map(|(s, t, w)| (s, t, *w)),
        )
    }

    #[test]
    fn accepts_well_formed_edges() {
        assert!(check(&[0, 1], &[(0, 1, 1), (1, 0, 2), (0, 0, 3)]));
        assert!(check(&[], &[]));
    }

    #[test]
    fn rejects_dangling_endpoint() {
        assert!(!check(&[0], &[(0, 1, 1)]));
        assert!(!check(&[1], &[(0, 1, 1)]));
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert!(!check(&[0, 1], &[(0, 1, 0)]));
        assert!(!check(&[0, 1], &[(0, 1, -2)]));
    }

    #[test]
    fn rejects_duplicate_pair() {
        assert!(!check(&[0, 1], &[(0, 1, 1), (0, 1, 4)]));
    }
}
