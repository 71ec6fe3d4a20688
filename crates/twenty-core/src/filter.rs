//! Candidate filter: narrow a candidate set by one yes/no observation.

use crate::catalogue::{Character, TraitTag};

/// Keep the candidates consistent with `answer` to the question about `tag`.
///
/// A trait that is not listed on a character is treated as not holding.
/// Input order is preserved. An empty result is valid and means the
/// answers contradict every remaining candidate.
pub fn filter(candidates: &[Character], tag: TraitTag, answer: bool) -> Vec<Character> {
    let kept: Vec<Character> = candidates
        .iter()
        .filter(|c| c.has(tag) == answer)
        .cloned()
        .collect();
    log::debug!(
        "filter {tag}={answer}: {} -> {} candidates",
        candidates.len(),
        kept.len()
    );
    kept
}

/// Number of candidates that have `tag`.
pub fn count_with(candidates: &[Character], tag: TraitTag) -> usize {
    candidates.iter().filter(|c| c.has(tag)).count()
}
