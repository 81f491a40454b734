//! Text similarity scoring
//!
//! Titles are compared with a longest-matching-block sequence matcher: find
//! the longest common contiguous run, then recurse on the pieces to its left
//! and right. The ratio is `2 * M / T` where `M` is the total length of the
//! matched runs and `T` the combined length of both inputs. This is the
//! classic Ratcliff/Obershelp "gestalt" score, including the popular-element
//! heuristic for long inputs.

use std::collections::HashMap;

/// Ratio a pair of titles must exceed to count as similar
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Inputs at least this long drop overly frequent characters from the index
const POPULAR_MIN_LEN: usize = 200;

/// Whether two texts are near-duplicates
///
/// Empty inputs are never similar to anything, including each other. The
/// comparison is case-insensitive and `true` only when the ratio is strictly
/// greater than `threshold`.
#[must_use]
pub fn similar(text1: &str, text2: &str, threshold: f64) -> bool {
    if text1.is_empty() || text2.is_empty() {
        return false;
    }
    similarity_ratio(&text1.to_lowercase(), &text2.to_lowercase()) > threshold
}

/// Case-sensitive similarity ratio in `[0, 1]`
///
/// Two empty strings score `1.0`. The greedy block search can depend on
/// argument order, so the inputs are put in a fixed order first, which makes
/// the ratio symmetric.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = SequenceMatcher::new(&a, &b).matched_len();
    2.0 * matched as f64 / total as f64
}

/// Matcher over two character sequences, indexed on `b`
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each character in `b`, popular characters excluded
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Total length of all matching blocks
    fn matched_len(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` inside the given window
    ///
    /// Ties resolve to the earliest `i`, then the earliest `j`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied().unwrap_or(0) + 1;
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

        // Popular characters are missing from the index; grow the block over them.
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
}
