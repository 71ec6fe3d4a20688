//! Catalogue entries.

use std::collections::BTreeSet;

use super::trait_tag::TraitTag;

/// An immutable catalogue entry: a name, the traits that hold for the
/// character, and hints ordered from least to most revealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Display name, unique within a catalogue (case-insensitively).
    pub name: String,
    /// Traits that hold. Anything not listed is presumed not to hold.
    pub traits: BTreeSet<TraitTag>,
    /// Flavor-text hints, least revealing first.
    pub hints: Vec<String>,
}

impl Character {
    /// Create a character with no traits or hints.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            traits: BTreeSet::new(),
            hints: Vec::new(),
        }
    }

    /// Add traits.
    pub fn with_traits(mut self, traits: impl IntoIterator<Item = TraitTag>) -> Self {
        self.traits.extend(traits);
        self
    }

    /// Append hints.
    pub fn with_hints<S: Into<String>>(mut self, hints: impl IntoIterator<Item = S>) -> Self {
        self.hints.extend(hints.into_iter().map(Into::into));
        self
    }

    /// Whether the trait holds for this character.
    pub fn has(&self, tag: TraitTag) -> bool {
        self.traits.contains(&tag)
    }

    /// Case-insensitive exact name comparison, ignoring surrounding
    /// whitespace.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Trait names, comma separated, in vocabulary order.
    pub fn trait_list(&self) -> String {
        self.traits
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_traits_do_not_hold() {
        let thor = Character::new("Thor").with_traits([TraitTag::God, TraitTag::Hammer]);
        assert!(thor.has(TraitTag::Hammer));
        assert!(!thor.has(TraitTag::Shield));
    }

    #[test]
    fn name_match_ignores_case_and_padding() {
        let c = Character::new("Iron Man");
        assert!(c.matches_name("iron man"));
        assert!(c.matches_name("  IRON MAN "));
        assert!(!c.matches_name("Iron"));
        assert!(!c.matches_name("ironman"));
    }

    #[test]
    fn trait_list_in_vocabulary_order() {
        let c = Character::new("Loki").with_traits([
            TraitTag::Trickster,
            TraitTag::Male,
            TraitTag::Asgardian,
        ]);
        assert_eq!(c.trait_list(), "asgardian, male, trickster");
    }

    #[test]
    fn hints_keep_order() {
        let c = Character::new("Hulk").with_hints(["green", "angry"]);
        assert_eq!(c.hints, vec!["green".to_string(), "angry".to_string()]);
    }
}
