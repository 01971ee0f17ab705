//! # Hypernet
//!
//! Shortest ancestral paths over a WordNet-style hierarchy of synsets.
//!
//! ## Features
//!
//! - Immutable digraph with directed cycle detection
//! - Multi-source breadth-first reachability
//! - Shortest ancestral path length and ancestor between vertex sets
//! - Synset/hypernym relation loading with a polysemous noun index
//! - Noun distance and outcast detection
//!
//! ```
//! use std::io::Cursor;
//! use hypernet::wordnet::{RelationFormat, WordNet};
//!
//! let wordnet = WordNet::from_readers(
//!     Cursor::new("0,a\n1,b\n2,c\n"),
//!     Cursor::new("0,2\n1,2\n"),
//!     &RelationFormat::default(),
//! )?;
//! assert_eq!(wordnet.distance("a", "b")?, Some(2));
//! assert_eq!(wordnet.sap("a", "b")?, Some("c"));
//! # Ok::<(), hypernet::error::HypernetError>(())
//! ```

pub mod cli;
pub mod error;
pub mod graph;
pub mod outcast;
pub mod sap;
pub mod wordnet;

pub mod prelude {
    pub use crate::error::{HypernetError, Result};
    pub use crate::graph::{BreadthFirstPaths, Digraph, DirectedCycle};
    pub use crate::outcast::Outcast;
    pub use crate::sap::{AncestralPath, Sap};
    pub use crate::wordnet::{RelationFormat, WordNet};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
