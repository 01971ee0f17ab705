//! Multi-source breadth-first reachability.

use std::collections::VecDeque;

use crate::error::{HypernetError, Result};
use crate::graph::Digraph;

/// Shortest hop distances from a set of source vertices.
///
/// All sources start at distance 0 and the search expands level by level, so
/// `dist_to(v)` is the distance from the nearest source. The tables are owned
/// by this value and built fresh for every search.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Run a breadth-first search from a single source.
    pub fn from_vertex(graph: &Digraph, source: usize) -> Result<Self> {
        Self::new(graph, &[source])
    }

    /// Run a breadth-first search from every vertex in `sources` at once.
    ///
    /// Fails with an invalid-argument error if `sources` is empty or names a
    /// vertex outside the graph. Duplicate sources are ignored.
    pub fn new(graph: &Digraph, sources: &[usize]) -> Result<Self> {
        if sources.is_empty() {
            return Err(HypernetError::invalid_argument("source vertex set is empty"));
        }

        let n = graph.vertex_count();
        let mut dist_to = vec![None; n];
        let mut edge_to = vec![None; n];
        let mut queue = VecDeque::with_capacity(sources.len());

        for &s in sources {
            if !graph.contains(s) {
                return Err(HypernetError::invalid_argument(format!(
                    "vertex {s} is not between 0 and {}",
                    n.saturating_sub(1)
                )));
            }
            if dist_to[s].is_none() {
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for &w in graph.adj(v) {
                if dist_to[w].is_none() {
                    dist_to[w] = Some(next);
                    edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        Ok(BreadthFirstPaths { dist_to, edge_to })
    }

    /// Whether `v` is reachable from some source.
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to.get(v).is_some_and(Option::is_some)
    }

    /// Hop distance from the nearest source, or `None` when unreachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }

    /// The vertices of a shortest path from the nearest source to `v`,
    /// starting at the source and ending at `v`.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.dist_to(v)?;
        let mut path = vec![v];
        let mut x = v;
        while let Some(prev) = self.edge_to[x] {
            path.push(prev);
            x = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Number of vertices the search covered, reachable or not.
    pub fn len(&self) -> usize {
        self.dist_to.len()
    }

    /// Whether the searched graph had no vertices.
    pub fn is_empty(&self) -> bool {
        self.dist_to.is_empty()
    }
}
