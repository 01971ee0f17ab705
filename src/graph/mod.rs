//! Graph module for Hypernet.
//!
//! This module provides the immutable digraph the hypernym hierarchy is stored
//! in, directed cycle detection, and multi-source breadth-first search.

pub mod bfs;
pub mod cycle;
pub mod digraph;

// Re-export commonly used types
pub use bfs::BreadthFirstPaths;
pub use cycle::DirectedCycle;
pub use digraph::Digraph;
