//! The catalogue compiled into the binary.

use super::{Catalogue, Character, Difficulty, TraitTag};

use TraitTag::*;

/// Raw built-in entry: name, traits, hints (least revealing first).
struct Entry {
    name: &'static str,
    traits: &'static [TraitTag],
    hints: &'static [&'static str],
}

const EASY: &[Entry] = &[
    Entry {
        name: "Spider-Man",
        traits: &[Male, Human, SuperStrength, SuperAgility, WebShooter, NewYork, Avenger, Hero],
        hints: &[
            "I was bitten by a radioactive spider.",
            "My powers include web-slinging and a 'spider-sense'.",
            "My alter ego is a high school student from Queens, New York.",
            "My main motto is 'With great power comes great responsibility'.",
        ],
    },
    Entry {
        name: "Iron Man",
        traits: &[Male, Human, Genius, PoweredSuit, Avenger, Hero, Billionaire, Weaponry],
        hints: &[
            "I am a founding member of the Avengers.",
            "My alter ego is a billionaire, playboy, and genius inventor.",
            "My heart is powered by an Arc Reactor.",
            "I created a series of powerful armored suits to fight villains.",
        ],
    },
    Entry {
        name: "Captain America",
        traits: &[Male, Human, SuperStrength, SuperSoldier, Avenger, Hero, Shield, WorldWar2],
        hints: &[
            "I am the super-soldier from World War II.",
            "My shield is made of vibranium.",
            "I was frozen in ice for decades before being revived.",
            "My alter ego is Steve Rogers, a symbol of American patriotism.",
        ],
    },
    Entry {
        name: "Hulk",
        traits: &[Male, HumanLike, SuperStrength, Scientist, Monster, Avenger, Hero, GammaRadiation],
        hints: &[
            "I turn into a green, powerful monster when I get angry.",
            "I was exposed to a high dose of gamma radiation.",
            "I have superhuman strength with no known upper limit.",
            "My alter ego is a brilliant scientist named Bruce Banner.",
        ],
    },
];

const MEDIUM: &[Entry] = &[
    Entry {
        name: "Thor",
        traits: &[Male, Asgardian, God, SuperStrength, Hammer, Avenger, Hero, Lightning],
        hints: &[
            "I was not born on Earth.",
            "Storms answer when I call.",
            "Only the worthy may lift my weapon.",
            "My father Odin rules the Nine Realms.",
        ],
    },
    Entry {
        name: "Black Widow",
        traits: &[Female, Human, Spy, SuperAgility, Avenger, Hero, Agent, Russia],
        hints: &[
            "I have no superpowers, only training.",
            "I grew up in the Red Room.",
            "I once worked as an agent of S.H.I.E.L.D.",
            "My name is Natasha Romanoff.",
        ],
    },
    Entry {
        name: "Doctor Strange",
        traits: &[Male, Human, Magic, Sorcerer, Avenger, Hero, Doctor, NewYork],
        hints: &[
            "I lost the use of my hands before I found my calling.",
            "I studied in Kamar-Taj.",
            "My sanctum sits on Bleecker Street.",
            "I am the Sorcerer Supreme.",
        ],
    },
    Entry {
        name: "Black Panther",
        traits: &[Male, Human, SuperStrength, King, Avenger, Hero, Wakanda, Vibranium],
        hints: &[
            "The heart-shaped herb gave me my strength.",
            "My suit absorbs kinetic energy.",
            "My nation hid its wealth from the world for centuries.",
            "Wakanda forever.",
        ],
    },
    Entry {
        name: "Loki",
        traits: &[Male, Asgardian, God, Magic, Villain, Trickster, ThorsBrother],
        hints: &[
            "I was adopted, though I learned it late.",
            "Illusions are my favorite weapon.",
            "I once led an alien army into New York.",
            "I am the God of Mischief.",
        ],
    },
    Entry {
        name: "Thanos",
        traits: &[Male, Alien, SuperStrength, Villain, Gauntlet, InfinityStones],
        hints: &[
            "I believe the universe needs balance.",
            "I was born on Titan.",
            "I sought six stones for my glove.",
            "I snapped my fingers and half of all life vanished.",
        ],
    },
    Entry {
        name: "Captain Marvel",
        traits: &[Female, Human, Alien, SuperStrength, Avenger, Hero],
        hints: &[
            "I was an air force pilot before I got my powers.",
            "My powers are from a fusion of human and alien DNA.",
            "I can fly and fire powerful energy blasts from my hands.",
            "My alter ego is Carol Danvers.",
        ],
    },
];

const HARD: &[Entry] = &[
    Entry {
        name: "Scarlet Witch",
        traits: &[Female, Mutant, Magic, RealityWarping, Avenger, Hero, ChaosMagic],
        hints: &[
            "My brother was the fastest man alive.",
            "My magic glows red.",
            "I once rewrote an entire town into a sitcom.",
            "My name is Wanda Maximoff.",
        ],
    },
    Entry {
        name: "Vision",
        traits: &[Male, Robot, SuperStrength, Avenger, Hero, Android, MindStone],
        hints: &[
            "I was built, not born.",
            "I can pass through walls.",
            "A stone sits in my forehead.",
            "Ultron meant me as his body.",
        ],
    },
    Entry {
        name: "Ant-Man",
        traits: &[Male, Human, Shrinking, AntControl, Avenger, Hero, ExCon],
        hints: &[
            "I am not the first to wear my suit.",
            "Pym Particles are my secret.",
            "I have a small army of insect friends.",
            "My name is Scott Lang.",
        ],
    },
    Entry {
        name: "The Wasp",
        traits: &[Female, Human, Shrinking, Avenger, Hero, Wings, Stings],
        hints: &[
            "My mother was lost in the quantum realm.",
            "I can fly when I am small.",
            "My blasters sting.",
            "My name is Hope van Dyne.",
        ],
    },
    Entry {
        name: "Winter Soldier",
        traits: &[Male, Human, SuperStrength, Assassin, AntiHero, MetalArm, WorldWar2],
        hints: &[
            "I fell from a train in the Alps.",
            "Ten words could turn me into a weapon.",
            "My left arm is not flesh.",
            "Steve Rogers was my best friend.",
        ],
    },
    Entry {
        name: "Nebula",
        traits: &[Female, Cyborg, Villain, Avenger, Assassin, ThanosDaughter],
        hints: &[
            "My sister always won our fights.",
            "My father replaced pieces of me after every loss.",
            "I sailed with the Guardians for a time.",
            "Gamora is my sister.",
        ],
    },
];

fn build(entries: &[Entry]) -> Vec<Character> {
    entries
        .iter()
        .map(|e| {
            Character::new(e.name)
                .with_traits(e.traits.iter().copied())
                .with_hints(e.hints.iter().copied())
        })
        .collect()
}

/// Build the built-in catalogue.
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::default();
    catalogue.partitions.insert(Difficulty::Easy, build(EASY));
    catalogue.partitions.insert(Difficulty::Medium, build(MEDIUM));
    catalogue.partitions.insert(Difficulty::Hard, build(HARD));
    catalogue
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_passes_validation() {
        let cat = catalogue();
        let validated = Catalogue::from_partitions(
            Difficulty::ALL
                .iter()
                .map(|d| (*d, cat.partition(*d).to_vec())),
        )
        .unwrap();
        assert_eq!(validated.len(), cat.len());
    }

    #[test]
    fn partition_sizes() {
        let cat = catalogue();
        assert_eq!(cat.partition(Difficulty::Easy).len(), 4);
        assert_eq!(cat.partition(Difficulty::Medium).len(), 7);
        assert_eq!(cat.partition(Difficulty::Hard).len(), 6);
    }

    #[test]
    fn characters_distinguishable_within_partition() {
        let cat = catalogue();
        for d in Difficulty::ALL {
            let sets: HashSet<_> = cat.partition(d).iter().map(|c| c.traits.clone()).collect();
            assert_eq!(sets.len(), cat.partition(d).len(), "{d}");
        }
    }

    #[test]
    fn every_character_has_hints() {
        for (_, c) in catalogue().iter() {
            assert!(!c.hints.is_empty(), "{}", c.name);
        }
    }
}
