//! Synset and hypernym record parsing.
//!
//! Synset records look like `id,term term term,gloss` and hypernym records
//! like `id,parent,parent,...`, one per line. Blank lines are skipped and
//! line numbers in errors are 1-based.

use std::io::BufRead;

use log::warn;

use crate::error::{HypernetError, Result};
use crate::wordnet::RelationFormat;

/// One synset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    /// Vertex id, the position of the record among the synsets.
    pub id: usize,
    /// Member terms.
    pub terms: Vec<String>,
    /// The raw term field, used as the synset's label.
    pub label: String,
    /// Everything after the term field, if present.
    pub gloss: Option<String>,
}

/// One hypernym record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymRecord {
    /// Line the record came from.
    pub line: usize,
    /// The child synset.
    pub id: usize,
    /// Parent synsets, possibly none.
    pub parents: Vec<usize>,
}

/// Parse a single synset record. `position` is the id the record is assigned.
pub fn parse_synset_line(
    line: &str,
    line_no: usize,
    position: usize,
    format: &RelationFormat,
) -> Result<SynsetRecord> {
    let mut fields = line.splitn(3, format.field_delimiter);

    let id_field = fields.next().unwrap_or_default();
    let declared = parse_id(id_field, line_no)?;

    let label = fields
        .next()
        .ok_or_else(|| HypernetError::parse(format!("line {line_no}: synset record has no terms")))?;
    let terms: Vec<String> = label
        .split(format.term_delimiter)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();
    if terms.is_empty() {
        return Err(HypernetError::parse(format!(
            "line {line_no}: synset record has no terms"
        )));
    }

    if declared != position {
        if format.strict_ids {
            return Err(HypernetError::parse(format!(
                "line {line_no}: synset id {declared} does not match its position {position}"
            )));
        }
        warn!("line {line_no}: synset id {declared} assigned vertex {position}");
    }

    Ok(SynsetRecord {
        id: position,
        terms,
        label: label.to_string(),
        gloss: fields.next().map(str::to_string),
    })
}

/// Parse a single hypernym record.
pub fn parse_hypernym_line(
    line: &str,
    line_no: usize,
    format: &RelationFormat,
) -> Result<HypernymRecord> {
    let mut fields = line.split(format.field_delimiter);
    let id = parse_id(fields.next().unwrap_or_default(), line_no)?;

    let parents = fields
        .filter(|field| !field.trim().is_empty())
        .map(|field| parse_id(field, line_no))
        .collect::<Result<Vec<_>>>()?;

    Ok(HypernymRecord {
        line: line_no,
        id,
        parents,
    })
}

/// Read every synset record, assigning ids in file order.
pub fn read_synsets<R: BufRead>(reader: R, format: &RelationFormat) -> Result<Vec<SynsetRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let position = records.len();
        records.push(parse_synset_line(line, i + 1, position, format)?);
    }
    Ok(records)
}

/// Read every hypernym record.
pub fn read_hypernyms<R: BufRead>(
    reader: R,
    format: &RelationFormat,
) -> Result<Vec<HypernymRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_hypernym_line(line, i + 1, format)?);
    }
    Ok(records)
}

fn parse_id(field: &str, line_no: usize) -> Result<usize> {
    let field = field.trim();
    field.parse::<usize>().map_err(|_| {
        HypernetError::parse(format!("line {line_no}: invalid synset id '{field}'"))
    })
}
