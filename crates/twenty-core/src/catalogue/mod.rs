//! The character catalogue, partitioned by difficulty.

pub mod builtin;
pub mod character;
pub mod format;
pub mod trait_tag;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;

pub use character::Character;
pub use trait_tag::TraitTag;

/// A catalogue partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// A handful of headline heroes.
    Easy,
    /// Heroes, gods, and villains.
    Medium,
    /// Deeper cuts.
    Hard,
}

impl Difficulty {
    /// All difficulties in order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a difficulty from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Some(Self::Easy),
            "medium" | "m" | "normal" => Some(Self::Medium),
            "hard" | "h" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Lowercase key used by the catalogue format.
    pub fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// The next difficulty, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// The static table of characters, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    partitions: BTreeMap<Difficulty, Vec<Character>>,
}

impl Catalogue {
    /// The catalogue compiled into the binary.
    pub fn builtin() -> Self {
        builtin::catalogue()
    }

    /// Build a catalogue from partitions, validating name uniqueness.
    pub fn from_partitions(
        partitions: impl IntoIterator<Item = (Difficulty, Vec<Character>)>,
    ) -> Result<Self, CatalogueError> {
        let mut map: BTreeMap<Difficulty, Vec<Character>> = BTreeMap::new();
        for (difficulty, characters) in partitions {
            map.entry(difficulty).or_default().extend(characters);
        }

        let mut seen = HashSet::new();
        for character in map.values().flatten() {
            if character.name.trim().is_empty() {
                return Err(CatalogueError::EmptyName);
            }
            if !seen.insert(character.name.to_lowercase()) {
                return Err(CatalogueError::DuplicateName(character.name.clone()));
            }
        }
        if seen.is_empty() {
            return Err(CatalogueError::Empty);
        }

        Ok(Self { partitions: map })
    }

    /// Parse a catalogue from its JSON format.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        format::parse(json)
    }

    /// Load a catalogue file.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json(&json)?;
        log::info!(
            "loaded catalogue from {} ({} characters)",
            path.display(),
            catalogue.len()
        );
        Ok(catalogue)
    }

    /// Render the catalogue in its JSON format.
    pub fn to_json(&self) -> Result<String, CatalogueError> {
        format::render(self)
    }

    /// Characters in a partition, in catalogue order. Empty if the
    /// partition is absent.
    pub fn partition(&self, difficulty: Difficulty) -> &[Character] {
        self.partitions
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Difficulties that have at least one character.
    pub fn difficulties(&self) -> Vec<Difficulty> {
        self.partitions
            .iter()
            .filter(|(_, chars)| !chars.is_empty())
            .map(|(d, _)| *d)
            .collect()
    }

    /// Find a character by name in any partition (case-insensitive).
    pub fn find(&self, name: &str) -> Option<(Difficulty, &Character)> {
        self.partitions.iter().find_map(|(d, chars)| {
            chars
                .iter()
                .find(|c| c.matches_name(name))
                .map(|c| (*d, c))
        })
    }

    /// Iterate every character with its partition.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &Character)> {
        self.partitions
            .iter()
            .flat_map(|(d, chars)| chars.iter().map(move |c| (*d, c)))
    }

    /// Total number of characters.
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Whether the catalogue has no characters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pairs of characters in the same partition with identical trait
    /// sets. Questions can never tell such a pair apart.
    pub fn indistinguishable(&self) -> Vec<(Difficulty, &Character, &Character)> {
        let mut pairs = Vec::new();
        for (difficulty, chars) in &self.partitions {
            for (i, a) in chars.iter().enumerate() {
                for b in &chars[i + 1..] {
                    if a.traits == b.traits {
                        pairs.push((*difficulty, a, b));
                    }
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_and_display() {
        assert_eq!(Difficulty::parse("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse(" medium "), Some(Difficulty::Medium));
        assert_eq!(Difficulty::parse("h"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("nightmare"), None);
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Hard.key(), "hard");
    }

    #[test]
    fn difficulty_cycles() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn duplicate_names_rejected_across_partitions() {
        let err = Catalogue::from_partitions([
            (Difficulty::Easy, vec![Character::new("Thor")]),
            (Difficulty::Hard, vec![Character::new("THOR")]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateName(name) if name == "THOR"));
    }

    #[test]
    fn json_export_loads_back() {
        let json = Catalogue::builtin().to_json().unwrap();
        assert!(json.contains("\"medium\""));
        let again = Catalogue::from_json(&json).unwrap();
        assert_eq!(again.len(), 17);
        assert_eq!(again.find("thor").map(|(d, _)| d), Some(Difficulty::Medium));
    }

    #[test]
    fn reports_indistinguishable_pairs() {
        let twins = Catalogue::from_partitions([(
            Difficulty::Easy,
            vec![
                Character::new("A").with_traits([TraitTag::God]),
                Character::new("B").with_traits([TraitTag::God]),
                Character::new("C"),
            ],
        )])
        .unwrap();
        let pairs = twins.indistinguishable();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1.name, "A");
        assert_eq!(pairs[0].2.name, "B");
        assert!(Catalogue::builtin().indistinguishable().is_empty());
    }

    #[test]
    fn empty_catalogue_rejected() {
        let err = Catalogue::from_partitions([(Difficulty::Easy, vec![])]).unwrap_err();
        assert!(matches!(err, CatalogueError::Empty));
    }

    #[test]
    fn blank_name_rejected() {
        let err =
            Catalogue::from_partitions([(Difficulty::Easy, vec![Character::new("  ")])])
                .unwrap_err();
        assert!(matches!(err, CatalogueError::EmptyName));
    }

    #[test]
    fn find_and_partition() {
        let cat = Catalogue::from_partitions([
            (Difficulty::Easy, vec![Character::new("Iron Man")]),
            (Difficulty::Medium, vec![Character::new("Loki")]),
        ])
        .unwrap();
        let (d, c) = cat.find("loki").unwrap();
        assert_eq!(d, Difficulty::Medium);
        assert_eq!(c.name, "Loki");
        assert!(cat.find("Nobody").is_none());
        assert!(cat.partition(Difficulty::Hard).is_empty());
        assert_eq!(cat.difficulties(), vec![Difficulty::Easy, Difficulty::Medium]);
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.iter().count(), 2);
    }

    #[test]
    fn load_missing_file() {
        let err = Catalogue::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogueError::Io { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalogue.json");
        std::fs::write(
            &path,
            r#"{"easy": {"Thor": {"hints": ["Hammer."], "traits": ["god"]}}}"#,
        )
        .unwrap();
        let cat = Catalogue::load(&path).unwrap();
        assert_eq!(cat.partition(Difficulty::Easy)[0].name, "Thor");
    }
}
