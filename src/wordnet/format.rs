//! Relation file dialect.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Describes how synset and hypernym records are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationFormat {
    /// Separator between the fields of a record.
    pub field_delimiter: char,

    /// Separator between the member terms of a synset.
    pub term_delimiter: char,

    /// Reject synset records whose numeric id differs from their position.
    /// When off, ids are assigned by position and a mismatch is only logged.
    pub strict_ids: bool,
}

impl Default for RelationFormat {
    fn default() -> Self {
        Self {
            field_delimiter: ',',
            term_delimiter: ' ',
            strict_ids: false,
        }
    }
}

impl RelationFormat {
    /// Set the field delimiter.
    pub fn with_field_delimiter(mut self, delimiter: char) -> Self {
        self.field_delimiter = delimiter;
        self
    }

    /// Set the term delimiter.
    pub fn with_term_delimiter(mut self, delimiter: char) -> Self {
        self.term_delimiter = delimiter;
        self
    }

    /// Enable or disable strict id checking.
    pub fn with_strict_ids(mut self, strict: bool) -> Self {
        self.strict_ids = strict;
        self
    }

    /// Load a format from a JSON file. Missing keys keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
