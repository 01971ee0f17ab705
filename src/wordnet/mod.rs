//! WordNet module for Hypernet.
//!
//! This module reads the synset and hypernym relations, builds the hypernym
//! hierarchy and answers noun-level distance and ancestor queries.

pub mod dictionary;
pub mod format;
pub mod parser;

// Re-export commonly used types
pub use dictionary::{WordNet, WordNetStats};
pub use format::RelationFormat;
pub use parser::{HypernymRecord, SynsetRecord};
