//! Directed cycle detection.

use crate::graph::Digraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Result of a depth-first search for a directed cycle.
///
/// Vertices are colored unvisited, in-progress (on the DFS stack) or done; an
/// edge into an in-progress vertex is a back edge and closes a cycle. The
/// search is iterative, so deep hierarchies cannot overflow the call stack.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Search `graph` for a directed cycle.
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut color = vec![Color::Unvisited; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];

        for start in 0..n {
            if color[start] != Color::Unvisited {
                continue;
            }

            // (vertex, index of the next out-edge to follow)
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            color[start] = Color::InProgress;

            while let Some(frame) = stack.last_mut() {
                let v = frame.0;
                let neighbors = graph.adj(v);

                if frame.1 == neighbors.len() {
                    color[v] = Color::Done;
                    stack.pop();
                    continue;
                }

                let w = neighbors[frame.1];
                frame.1 += 1;

                match color[w] {
                    Color::Unvisited => {
                        parent[w] = Some(v);
                        color[w] = Color::InProgress;
                        stack.push((w, 0));
                    }
                    Color::InProgress => {
                        return DirectedCycle {
                            cycle: Some(trace_cycle(&parent, v, w)),
                        };
                    }
                    Color::Done => {}
                }
            }
        }

        DirectedCycle { cycle: None }
    }

    /// Whether the graph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The vertices of one directed cycle, first and last being the same
    /// vertex, or `None` if the graph is acyclic.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Walk the DFS tree back from `v` to `w` to recover the cycle closed by the
/// back edge `v -> w`. A self-loop yields `[v, v]`.
fn trace_cycle(parent: &[Option<usize>], v: usize, w: usize) -> Vec<usize> {
    let mut cycle = vec![w, v];
    let mut x = v;
    while x != w {
        match parent[x] {
            Some(p) => {
                x = p;
                cycle.push(x);
            }
            None => break,
        }
    }
    cycle.reverse();
    cycle
}
