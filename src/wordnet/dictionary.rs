//! The WordNet concept dictionary.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{HypernetError, Result};
use crate::graph::{Digraph, DirectedCycle};
use crate::sap::{AncestralPath, Sap};
use crate::wordnet::parser::{HypernymRecord, SynsetRecord, read_hypernyms, read_synsets};
use crate::wordnet::RelationFormat;

/// Summary counts for a loaded dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetStats {
    pub synsets: usize,
    pub hypernym_edges: usize,
    pub nouns: usize,
    pub roots: usize,
}

/// A hierarchy of synsets linked by hypernym edges, with a noun index.
///
/// Built once from a synset relation and a hypernym relation and immutable
/// afterwards. Construction fails if the hypernym edges form a cycle, so every
/// `WordNet` is backed by a DAG. A noun may belong to several synsets.
#[derive(Debug, Clone)]
pub struct WordNet {
    /// owns the hypernym graph
    sap: Sap,
    /// noun -> ids of the synsets containing it, ascending
    nouns: BTreeMap<String, Vec<usize>>,
    /// id -> raw term field
    labels: Vec<String>,
    /// id -> gloss
    glosses: Vec<Option<String>>,
}

impl WordNet {
    /// Load a dictionary from a synset file and a hypernym file in the default
    /// comma-separated format.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(synsets: P, hypernyms: Q) -> Result<Self> {
        Self::open_with_format(synsets, hypernyms, &RelationFormat::default())
    }

    /// Load a dictionary from files in the given format.
    pub fn open_with_format<P: AsRef<Path>, Q: AsRef<Path>>(
        synsets: P,
        hypernyms: Q,
        format: &RelationFormat,
    ) -> Result<Self> {
        debug!(
            "Loading synsets from {} and hypernyms from {}",
            synsets.as_ref().display(),
            hypernyms.as_ref().display()
        );
        let synsets = BufReader::new(File::open(synsets)?);
        let hypernyms = BufReader::new(File::open(hypernyms)?);
        Self::from_readers(synsets, hypernyms, format)
    }

    /// Build a dictionary from any pair of buffered readers.
    pub fn from_readers<R: BufRead, S: BufRead>(
        synsets: R,
        hypernyms: S,
        format: &RelationFormat,
    ) -> Result<Self> {
        let synsets = read_synsets(synsets, format)?;
        let hypernyms = read_hypernyms(hypernyms, format)?;
        Self::from_records(synsets, hypernyms)
    }

    /// Build a dictionary from parsed records.
    pub fn from_records(synsets: Vec<SynsetRecord>, hypernyms: Vec<HypernymRecord>) -> Result<Self> {
        let mut graph = Digraph::with_vertices(synsets.len());
        let check = |graph: &Digraph, record: &HypernymRecord, v: usize| {
            if graph.contains(v) {
                return Ok(());
            }
            Err(HypernetError::graph(format!(
                "line {}: synset {v} is not between 0 and {}",
                record.line,
                synsets.len().saturating_sub(1)
            )))
        };
        for record in &hypernyms {
            // a root record still names a synset
            check(&graph, record, record.id)?;
            for &parent in &record.parents {
                check(&graph, record, parent)?;
                graph.add_edge(record.id, parent)?;
            }
        }

        let cycle = DirectedCycle::new(&graph);
        if let Some(cycle) = cycle.cycle() {
            return Err(HypernetError::graph(format!(
                "hypernym relation is not acyclic: {cycle:?}"
            )));
        }

        let mut nouns: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut labels = Vec::with_capacity(synsets.len());
        let mut glosses = Vec::with_capacity(synsets.len());
        for record in synsets {
            for term in record.terms {
                let ids = nouns.entry(term).or_default();
                // a term repeated inside one synset maps to it once
                if ids.last() != Some(&record.id) {
                    ids.push(record.id);
                }
            }
            labels.push(record.label);
            glosses.push(record.gloss);
        }

        info!(
            "Loaded {} synsets, {} hypernym edges, {} nouns",
            graph.vertex_count(),
            graph.edge_count(),
            nouns.len()
        );

        Ok(WordNet {
            sap: Sap::from_graph(graph),
            nouns,
            labels,
            glosses,
        })
    }

    /// All nouns, in lexicographic order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// Number of distinct nouns.
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Whether `word` is a noun of this dictionary. Matching is exact.
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains_key(word)
    }

    /// Ids of the synsets containing `word`, ascending.
    pub fn synsets_of(&self, word: &str) -> Option<&[usize]> {
        self.nouns.get(word).map(Vec::as_slice)
    }

    /// Number of synsets.
    pub fn synset_count(&self) -> usize {
        self.labels.len()
    }

    /// The label (all member terms) of synset `id`.
    pub fn synset(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// The gloss of synset `id`, if the record had one.
    pub fn gloss(&self, id: usize) -> Option<&str> {
        self.glosses.get(id).and_then(|g| g.as_deref())
    }

    /// The hypernym graph: an edge from every synset to each of its hypernyms.
    pub fn hypernym_graph(&self) -> &Digraph {
        self.sap.graph()
    }

    /// The ancestral path engine over the hypernym graph.
    pub fn sap_engine(&self) -> &Sap {
        &self.sap
    }

    /// Length and ancestor of a shortest ancestral path between any synset of
    /// `noun_a` and any synset of `noun_b`.
    pub fn ancestral_path(&self, noun_a: &str, noun_b: &str) -> Result<Option<AncestralPath>> {
        let a = self.require_noun(noun_a)?;
        let b = self.require_noun(noun_b)?;
        self.sap.path_between(a, b)
    }

    /// Semantic distance between two nouns: the length of the shortest
    /// ancestral path between their synsets, or `None` if they share no
    /// ancestor.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<Option<usize>> {
        Ok(self.ancestral_path(noun_a, noun_b)?.map(|p| p.length))
    }

    /// Label of the common ancestor on a shortest ancestral path between two
    /// nouns, or `None` if they share no ancestor.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<Option<&str>> {
        Ok(self
            .ancestral_path(noun_a, noun_b)?
            .and_then(|p| self.synset(p.ancestor)))
    }

    /// Summary counts.
    pub fn stats(&self) -> WordNetStats {
        let graph = self.hypernym_graph();
        WordNetStats {
            synsets: self.synset_count(),
            hypernym_edges: graph.edge_count(),
            nouns: self.noun_count(),
            roots: graph.roots().len(),
        }
    }

    fn require_noun(&self, word: &str) -> Result<&[usize]> {
        self.synsets_of(word)
            .ok_or_else(|| HypernetError::not_found(format!("noun '{word}'")))
    }
}
