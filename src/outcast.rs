//! Outcast detection.

use crate::error::{HypernetError, Result};
use crate::wordnet::WordNet;

/// Finds the noun least related to the rest of a group.
#[derive(Debug, Clone, Copy)]
pub struct Outcast<'a> {
    wordnet: &'a WordNet,
}

impl<'a> Outcast<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Outcast { wordnet }
    }

    /// For each noun, the sum of its distances to every noun in the group
    /// (itself included, contributing 0).
    ///
    /// Fails if a noun is unknown or two nouns share no ancestor.
    pub fn distance_sums<S: AsRef<str>>(&self, nouns: &[S]) -> Result<Vec<usize>> {
        let mut sums = Vec::with_capacity(nouns.len());
        for a in nouns {
            let mut sum = 0;
            for b in nouns {
                let (a, b) = (a.as_ref(), b.as_ref());
                sum += self.wordnet.distance(a, b)?.ok_or_else(|| {
                    HypernetError::invalid_argument(format!(
                        "'{a}' and '{b}' have no common ancestor"
                    ))
                })?;
            }
            sums.push(sum);
        }
        Ok(sums)
    }

    /// The noun with the strictly greatest distance sum. Ties go to the
    /// earliest noun in the input.
    pub fn outcast<S: AsRef<str>>(&self, nouns: &[S]) -> Result<String> {
        let sums = self.distance_sums(nouns)?;

        let mut best: Option<(usize, usize)> = None;
        for (i, &sum) in sums.iter().enumerate() {
            if best.is_none_or(|(_, max)| sum > max) {
                best = Some((i, sum));
            }
        }

        best.map(|(i, _)| nouns[i].as_ref().to_string())
            .ok_or_else(|| HypernetError::invalid_argument("outcast needs at least one noun"))
    }
}
