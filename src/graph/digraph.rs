//! Fixed-size adjacency-list digraph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HypernetError, Result};

/// A directed graph over the vertices `0..V`.
///
/// The vertex count is fixed when the graph is created and edges can only be
/// added while it is being built, so every public handle to a `Digraph` sees an
/// immutable structure. Out-edges keep their insertion order.
///
/// The serialized form is the vertex count plus the edge list, and
/// deserializing goes through [`Digraph::new`], so endpoints are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EdgeList", into = "EdgeList")]
pub struct Digraph {
    /// Out-neighbors of each vertex, in insertion order.
    adjacency: Vec<Vec<usize>>,
    /// Number of edges pointing into each vertex.
    indegree: Vec<usize>,
    /// Total number of edges.
    edge_count: usize,
}

impl Digraph {
    /// Create a graph with `vertices` vertices and no edges.
    pub fn with_vertices(vertices: usize) -> Self {
        Digraph {
            adjacency: vec![Vec::new(); vertices],
            indegree: vec![0; vertices],
            edge_count: 0,
        }
    }

    /// Create a graph with `vertices` vertices from an edge list.
    ///
    /// Fails with a graph error when an endpoint lies outside `0..vertices`.
    pub fn new<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Digraph::with_vertices(vertices);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Load a graph in the plain text format: the vertex count, the edge
    /// count, then one `from to` pair per edge. Tokens may be separated by
    /// any whitespace.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a graph in the plain text format from any buffered reader.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_whitespace();

        let vertices = next_count(&mut tokens, "number of vertices")?;
        let edges = next_count(&mut tokens, "number of edges")?;

        let mut graph = Digraph::with_vertices(vertices);
        for i in 0..edges {
            let from = next_count(&mut tokens, &format!("tail of edge {i}"))?;
            let to = next_count(&mut tokens, &format!("head of edge {i}"))?;
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Add the edge `from -> to`. Only used while a graph is being built.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.validate_vertex(from)?;
        self.validate_vertex(to)?;
        self.adjacency[from].push(to);
        self.indegree[to] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    /// Out-neighbors of `v` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v` is not a vertex of this graph.
    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Number of edges leaving `v`.
    pub fn outdegree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Number of edges entering `v`.
    pub fn indegree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.indegree[v])
    }

    /// Vertices without out-edges. In a hypernym graph these are the roots of
    /// the hierarchy.
    pub fn roots(&self) -> Vec<usize> {
        (0..self.vertex_count())
            .filter(|&v| self.adjacency[v].is_empty())
            .collect()
    }

    /// The graph with every edge reversed.
    pub fn reverse(&self) -> Digraph {
        let mut reversed = Digraph::with_vertices(self.vertex_count());
        for (from, targets) in self.adjacency.iter().enumerate() {
            for &to in targets {
                reversed.adjacency[to].push(from);
                reversed.indegree[from] += 1;
            }
        }
        reversed.edge_count = self.edge_count;
        reversed
    }

    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.vertex_count() {
            return Err(HypernetError::graph(format!(
                "vertex {v} is not between 0 and {}",
                self.vertex_count().saturating_sub(1)
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct EdgeList {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl TryFrom<EdgeList> for Digraph {
    type Error = HypernetError;

    fn try_from(list: EdgeList) -> Result<Self> {
        Digraph::new(list.vertices, list.edges)
    }
}

impl From<Digraph> for EdgeList {
    fn from(graph: Digraph) -> Self {
        let edges = graph
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
            .collect();
        EdgeList {
            vertices: graph.vertex_count(),
            edges,
        }
    }
}

fn next_count<'a, I>(tokens: &mut I, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| HypernetError::parse(format!("missing {what}")))?;
    token
        .parse::<usize>()
        .map_err(|_| HypernetError::parse(format!("invalid {what}: '{token}'")))
}
