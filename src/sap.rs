//! Shortest ancestral path resolution.
//!
//! An ancestral path between two vertex sets `A` and `B` is a pair of directed
//! paths, one from some `a ∈ A` and one from some `b ∈ B`, ending at a common
//! vertex `x`, the ancestor. Its length is the sum of the two path lengths.
//! [`Sap`] finds the shortest one by running one breadth-first search per
//! side and scanning all vertices for the minimum combined distance.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{BreadthFirstPaths, Digraph};

/// A shortest ancestral path: its length and the common ancestor it runs
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestralPath {
    /// Total hops from both sides to the ancestor.
    pub length: usize,
    /// The common ancestor.
    pub ancestor: usize,
}

/// Shortest ancestral path engine over a private copy of a digraph.
///
/// The graph need not be acyclic. Queries never mutate the engine; every call
/// allocates its own search tables, so a `Sap` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Sap {
    graph: Digraph,
}

impl Sap {
    /// Create an engine over a copy of `graph`.
    pub fn new(graph: &Digraph) -> Self {
        Sap {
            graph: graph.clone(),
        }
    }

    /// Create an engine that takes ownership of `graph`.
    pub fn from_graph(graph: Digraph) -> Self {
        Sap { graph }
    }

    /// The graph this engine answers queries on.
    pub fn graph(&self) -> &Digraph {
        &self.graph
    }

    /// Length of a shortest ancestral path between `v` and `w`, or `None` if
    /// they have no common ancestor.
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.path(v, w)?.map(|p| p.length))
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path, or
    /// `None` if they have no common ancestor.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.path(v, w)?.map(|p| p.ancestor))
    }

    /// Length and ancestor of a shortest ancestral path between `v` and `w`.
    pub fn path(&self, v: usize, w: usize) -> Result<Option<AncestralPath>> {
        self.path_between(&[v], &[w])
    }

    /// Length of a shortest ancestral path between any vertex of `vs` and any
    /// vertex of `ws`.
    pub fn length_between(&self, vs: &[usize], ws: &[usize]) -> Result<Option<usize>> {
        Ok(self.path_between(vs, ws)?.map(|p| p.length))
    }

    /// A common ancestor on a shortest ancestral path between any vertex of
    /// `vs` and any vertex of `ws`.
    pub fn ancestor_between(&self, vs: &[usize], ws: &[usize]) -> Result<Option<usize>> {
        Ok(self.path_between(vs, ws)?.map(|p| p.ancestor))
    }

    /// Length and ancestor of a shortest ancestral path between the vertex
    /// sets `vs` and `ws`.
    ///
    /// Among ancestors with the same minimal length the one with the lowest
    /// vertex id wins, independent of edge order. Fails with an
    /// invalid-argument error if either set is empty or holds a vertex
    /// outside the graph.
    pub fn path_between(&self, vs: &[usize], ws: &[usize]) -> Result<Option<AncestralPath>> {
        let from_v = BreadthFirstPaths::new(&self.graph, vs)?;
        let from_w = BreadthFirstPaths::new(&self.graph, ws)?;
        let result = closest_common_ancestor(&from_v, &from_w);
        debug!("sap({vs:?}, {ws:?}) = {result:?}");
        Ok(result)
    }

    /// The vertices of a shortest ancestral path between `vs` and `ws`: from a
    /// vertex of `vs` up to the ancestor, then down to a vertex of `ws`.
    pub fn full_path(&self, vs: &[usize], ws: &[usize]) -> Result<Option<Vec<usize>>> {
        let from_v = BreadthFirstPaths::new(&self.graph, vs)?;
        let from_w = BreadthFirstPaths::new(&self.graph, ws)?;

        let Some(found) = closest_common_ancestor(&from_v, &from_w) else {
            return Ok(None);
        };
        let (Some(mut up), Some(mut down)) = (
            from_v.path_to(found.ancestor),
            from_w.path_to(found.ancestor),
        ) else {
            return Ok(None);
        };

        down.pop();
        down.reverse();
        up.extend(down);
        Ok(Some(up))
    }
}

/// Scan vertices in increasing id order and keep the first one with the
/// strictly smallest combined distance.
fn closest_common_ancestor(
    from_v: &BreadthFirstPaths,
    from_w: &BreadthFirstPaths,
) -> Option<AncestralPath> {
    let mut best: Option<AncestralPath> = None;

    for x in 0..from_v.len() {
        let (Some(dv), Some(dw)) = (from_v.dist_to(x), from_w.dist_to(x)) else {
            continue;
        };
        let length = dv + dw;
        if best.is_none_or(|b| length < b.length) {
            best = Some(AncestralPath {
                length,
                ancestor: x,
            });
        }
    }

    best
}
