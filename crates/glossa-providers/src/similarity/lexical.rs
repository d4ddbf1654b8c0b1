//! Lexical similarity
//!
//! Ratcliff/Obershelp alignment over Unicode scalar values, computed the way
//! the classic sequence matcher does it: find the longest matching block,
//! recurse into the unmatched regions on both sides, and report
//! `2 * matched / total`.

use std::collections::HashMap;

use async_trait::async_trait;
use glossa_domain::constants::LEXICAL_AUTOJUNK_MIN_LENGTH;
use glossa_domain::error::Result;
use glossa_domain::ports::providers::SimilarityScorer;
use glossa_domain::value_objects::{ScoreOutcome, SimilarityMethod, SimilarityScore, TextPair};

/// Character-sequence similarity scorer
///
/// Stateless: every call builds fresh matcher tables. Before matching, the
/// pair is put in canonical order (fewer characters first, then by text), so
/// `score(a, b) == score(b, a)` exactly.
///
/// # Example
///
/// ```ignore
/// let scorer = LexicalScorer::new();
/// let outcome = scorer.compute(&TextPair::new("abcd", "bcde")).await?;
/// assert_eq!(outcome.score.value(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer {
    autojunk: bool,
}

impl LexicalScorer {
    /// Scorer without the popular-character heuristic
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the popular-character heuristic
    ///
    /// When enabled, in a second text of at least
    /// [`LEXICAL_AUTOJUNK_MIN_LENGTH`] characters, a character occurring more
    /// than `len / 100 + 1` times never seeds a match. It can still extend one.
    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    /// Similarity ratio of two texts in `[0.0, 1.0]`
    pub fn ratio(&self, first: &str, second: &str) -> f64 {
        if first == second {
            return 1.0;
        }

        let first: Vec<char> = first.chars().collect();
        let second: Vec<char> = second.chars().collect();
        let (a, b) = if (first.len(), &first) <= (second.len(), &second) {
            (first, second)
        } else {
            (second, first)
        };

        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }

        let matcher = SequenceMatcher::new(&a, &b, self.autojunk);
        #[allow(clippy::cast_precision_loss)]
        let ratio = 2.0 * matcher.matched_len() as f64 / total as f64;
        ratio
    }
}

#[async_trait]
impl SimilarityScorer for LexicalScorer {
    fn method(&self) -> SimilarityMethod {
        SimilarityMethod::Lexical
    }

    async fn compute(&self, pair: &TextPair) -> Result<ScoreOutcome> {
        let ratio = self.ratio(pair.source(), pair.target());
        Ok(ScoreOutcome::new(
            SimilarityMethod::Lexical,
            SimilarityScore::clamped(ratio),
        ))
    }
}

/// Longest-common-block matcher over two character slices
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each (non-popular) character of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

/// `(i, j, k)`: `a[i..i + k] == b[j..j + k]`
type Block = (usize, usize, usize);

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char], autojunk: bool) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= LEXICAL_AUTOJUNK_MIN_LENGTH {
            let popular_threshold = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= popular_threshold);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Ties resolve to the block starting earliest in `a`, then earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
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
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular characters never seed a match but may extend one
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }

    /// Total characters covered by the matching blocks
    fn matched_len(&self) -> usize {
        let mut matched = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }
}
