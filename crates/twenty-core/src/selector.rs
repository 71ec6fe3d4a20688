//! Question selection for system-guesses mode.

use std::collections::BTreeSet;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalogue::{Character, TraitTag};
use crate::filter::count_with;

/// Question selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// First eligible tag in vocabulary order.
    Priority,
    /// Uniformly random eligible tag.
    Random,
    /// Eligible tag that splits the candidates most evenly.
    BestSplit,
}

impl Strategy {
    /// All strategies in display order.
    pub const ALL: [Strategy; 3] = [Strategy::Priority, Strategy::Random, Strategy::BestSplit];

    /// Parse a strategy from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "priority" | "fixed" | "ordered" => Some(Self::Priority),
            "random" | "rand" => Some(Self::Random),
            "best split" | "bestsplit" | "best" | "split" => Some(Self::BestSplit),
            _ => None,
        }
    }

    /// The next strategy, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Priority => Self::Random,
            Self::Random => Self::BestSplit,
            Self::BestSplit => Self::Priority,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "Priority"),
            Self::Random => write!(f, "Random"),
            Self::BestSplit => write!(f, "Best Split"),
        }
    }
}

/// Picks the next tag to ask about.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSelector {
    strategy: Strategy,
}

impl QuestionSelector {
    /// Create a selector with the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Choose an untried tag that splits `candidates`.
    ///
    /// Returns `None` when at most one candidate is left or when no untried
    /// tag tells the remaining candidates apart.
    pub fn next_question(
        &self,
        candidates: &[Character],
        asked: &BTreeSet<TraitTag>,
        rng: &mut StdRng,
    ) -> Option<TraitTag> {
        if candidates.len() <= 1 {
            return None;
        }
        let eligible = splitting_tags(candidates, asked);
        if eligible.is_empty() {
            return None;
        }

        let tag = match self.strategy {
            Strategy::Priority => eligible[0],
            Strategy::Random => eligible[rng.random_range(0..eligible.len())],
            Strategy::BestSplit => {
                let n = candidates.len();
                *eligible
                    .iter()
                    .min_by_key(|tag| (2 * count_with(candidates, **tag)).abs_diff(n))?
            }
        };
        log::debug!(
            "{} selector chose {tag} ({} eligible, {} candidates)",
            self.strategy,
            eligible.len(),
            candidates.len()
        );
        Some(tag)
    }
}

/// Untried tags, in priority order, that at least one candidate has and at
/// least one lacks.
pub fn splitting_tags(candidates: &[Character], asked: &BTreeSet<TraitTag>) -> Vec<TraitTag> {
    TraitTag::ALL
        .into_iter()
        .filter(|tag| !asked.contains(tag))
        .filter(|tag| {
            let yes = count_with(candidates, *tag);
            yes > 0 && yes < candidates.len()
        })
        .collect()
}

/// Whether every tag in the vocabulary has been asked.
pub fn vocabulary_exhausted(asked: &BTreeSet<TraitTag>) -> bool {
    TraitTag::ALL.iter().all(|tag| asked.contains(tag))
}
