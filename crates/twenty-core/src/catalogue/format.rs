//! JSON catalogue format.
//!
//! ```json
//! {
//!   "easy": {
//!     "Iron Man": {
//!       "hints": ["I am a founding member of the Avengers."],
//!       "traits": ["male", "human", "genius", "avenger"]
//!     }
//!   },
//!   "hard": {
//!     "Vision": { "hints": [], "traits": { "android": true, "human": false } }
//!   }
//! }
//! ```
//!
//! Traits may be a list of tags or a tag-to-boolean map; `false` entries are
//! dropped since unlisted traits never hold anyway.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Catalogue, Character, Difficulty, TraitTag};
use crate::error::CatalogueError;

/// Trait encoding accepted by the catalogue format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum TraitSpec {
    List(Vec<String>),
    Map(BTreeMap<String, bool>),
}

impl Default for TraitSpec {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryFile {
    #[serde(default)]
    hints: Vec<String>,
    #[serde(default)]
    traits: TraitSpec,
}

type CatalogueFile = BTreeMap<String, BTreeMap<String, EntryFile>>;

/// Parse and validate a JSON catalogue.
pub fn parse(json: &str) -> Result<Catalogue, CatalogueError> {
    let file: CatalogueFile = serde_json::from_str(json)?;

    let mut partitions = Vec::new();
    for (key, entries) in file {
        let difficulty =
            Difficulty::parse(&key).ok_or_else(|| CatalogueError::UnknownDifficulty(key.clone()))?;
        let mut characters = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            let traits = resolve_traits(&name, entry.traits)?;
            characters.push(
                Character::new(name)
                    .with_traits(traits)
                    .with_hints(entry.hints),
            );
        }
        partitions.push((difficulty, characters));
    }

    Catalogue::from_partitions(partitions)
}

fn resolve_traits(character: &str, spec: TraitSpec) -> Result<Vec<TraitTag>, CatalogueError> {
    let names: Vec<String> = match spec {
        TraitSpec::List(list) => list,
        TraitSpec::Map(map) => map
            .into_iter()
            .filter(|(_, holds)| *holds)
            .map(|(name, _)| name)
            .collect(),
    };
    names
        .into_iter()
        .map(|name| {
            TraitTag::parse(&name).ok_or_else(|| CatalogueError::UnknownTrait {
                character: character.to_string(),
                tag: name,
            })
        })
        .collect()
}

/// Render a catalogue as pretty-printed JSON (trait lists form).
pub fn render(catalogue: &Catalogue) -> Result<String, CatalogueError> {
    let mut file: CatalogueFile = BTreeMap::new();
    for (difficulty, character) in catalogue.iter() {
        file.entry(difficulty.key().to_string()).or_default().insert(
            character.name.clone(),
            EntryFile {
                hints: character.hints.clone(),
                traits: TraitSpec::List(
                    character.traits.iter().map(|t| t.name().to_string()).collect(),
                ),
            },
        );
    }
    Ok(serde_json::to_string_pretty(&file)?)
}
