//! Ratcliff/Obershelp string similarity.
//!
//! [`SequenceMatcher`] runs the Ratcliff/Obershelp matching-blocks search
//! over Unicode scalar values: the longest matching block is located
//! through an index of the second sequence, then the unmatched regions on
//! either side are searched recursively. The ratio is
//! `2 * M / T` where `M` is the number of matched characters and `T` the
//! combined length.
//!
//! The block search breaks ties by position, which makes the raw ratio
//! order dependent for a handful of inputs. [`SequenceRatio`] canonicalizes
//! argument order so the score used for clustering is exactly symmetric.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::config::SimilarityConfig;

/// Length of the second sequence from which the popularity heuristic applies.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Pairwise similarity between two labels.
///
/// Implementations must return a value in `[0, 1]`, be symmetric and score a
/// label against itself as `1.0`. The matrix builder relies on all three.
pub trait LabelSimilarity {
    /// Similarity of `a` and `b`.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// A run of equal characters: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchingBlock {
    /// Start offset in the first sequence (in characters)
    pub a: usize,
    /// Start offset in the second sequence (in characters)
    pub b: usize,
    /// Number of matching characters
    pub size: usize,
}

/// Character-level sequence matcher.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Create a matcher with the popularity heuristic enabled.
    pub fn new(a: &str, b: &str) -> Self {
        Self::with_autojunk(a, b, true)
    }

    /// Create a matcher, choosing whether popular characters are ignored.
    pub fn with_autojunk(a: &str, b: &str, autojunk: bool) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let b2j = Self::index_second(&b, autojunk);
        Self { a, b, b2j }
    }

    /// Map every character of `b` to its ascending positions.
    ///
    /// For sequences of at least [`AUTOJUNK_MIN_LEN`] characters, characters
    /// occurring more than `1 + len / 100` times are dropped from the index
    /// so they never anchor a match (they can still extend one).
    fn index_second(b: &[char], autojunk: bool) -> HashMap<char, Vec<usize>> {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        b2j
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among maximal blocks the one starting earliest in `a` wins, then the
    /// one starting earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            a: alo,
            b: blo,
            size: 0,
        };
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let run = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, run);
                    if run > best.size {
                        best = MatchingBlock {
                            a: i + 1 - run,
                            b: j + 1 - run,
                            size: run,
                        };
                    }
                }
            }
            j2len = next_j2len;
        }

        // Grow the block over characters left out of the index.
        while best.a > alo && best.b > blo && self.a[best.a - 1] == self.b[best.b - 1] {
            best.a -= 1;
            best.b -= 1;
            best.size += 1;
        }
        while best.a + best.size < ahi
            && best.b + best.size < bhi
            && self.a[best.a + best.size] == self.b[best.b + best.size]
        {
            best.size += 1;
        }

        best
    }

    /// All matching blocks, ordered by position, adjacent blocks merged.
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a && blo < block.b {
                pending.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                pending.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_unstable();

        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }

        merged
    }

    /// Total number of matched characters.
    pub fn matched_chars(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.size).sum()
    }

    /// Similarity ratio `2 * M / T`; `1.0` when both sequences are empty.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / total as f64
    }
}

/// Symmetric Ratcliff/Obershelp ratio used to build similarity matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRatio {
    autojunk: bool,
}

impl Default for SequenceRatio {
    fn default() -> Self {
        Self { autojunk: true }
    }
}

impl SequenceRatio {
    /// Create a scorer with explicit autojunk behaviour.
    pub fn new(autojunk: bool) -> Self {
        Self { autojunk }
    }

    /// Create a scorer from configuration.
    pub fn from_config(config: &SimilarityConfig) -> Self {
        Self::new(config.autojunk)
    }
}

impl LabelSimilarity for SequenceRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        SequenceMatcher::with_autojunk(first, second, self.autojunk).ratio()
    }
}

/// Similarity of two labels with the default scorer.
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceRatio::default().similarity(a, b)
}
