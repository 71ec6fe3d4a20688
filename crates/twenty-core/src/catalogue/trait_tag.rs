//! The closed trait vocabulary used for yes/no narrowing.

use serde::{Deserialize, Serialize};

/// A discrete attribute a character either has or lacks.
///
/// Declaration order is the priority order used by
/// [`Strategy::Priority`](crate::selector::Strategy::Priority): broad
/// affiliations and origins first, then powers, gear, and trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TraitTag {
    /// Member of the Avengers.
    Avenger,
    /// Villain.
    Villain,
    /// Female.
    Female,
    /// Human.
    Human,
    /// From Asgard.
    Asgardian,
    /// Uses magic.
    Magic,
    /// Superhuman strength.
    SuperStrength,
    /// Worshipped as a god.
    God,
    /// Extraterrestrial.
    Alien,
    /// Mutant.
    Mutant,
    /// Robot.
    Robot,
    /// Part machine.
    Cyborg,
    /// Android.
    Android,
    /// Humanoid but not quite human.
    HumanLike,
    /// Hero.
    Hero,
    /// Anti-hero.
    AntiHero,
    /// Male.
    Male,
    /// Superhuman agility.
    SuperAgility,
    /// Super-soldier serum.
    SuperSoldier,
    /// Genius intellect.
    Genius,
    /// Scientist.
    Scientist,
    /// Monster form.
    Monster,
    /// Powered by gamma radiation.
    GammaRadiation,
    /// Wears a powered suit.
    PoweredSuit,
    /// Relies on built-in weaponry.
    Weaponry,
    /// Billionaire.
    Billionaire,
    /// Shoots webs.
    WebShooter,
    /// Carries a shield.
    Shield,
    /// Wields a hammer.
    Hammer,
    /// Commands lightning.
    Lightning,
    /// Spy.
    Spy,
    /// Works as an agent.
    Agent,
    /// Sorcerer.
    Sorcerer,
    /// Medical doctor.
    Doctor,
    /// Rules a nation.
    King,
    /// Trickster.
    Trickster,
    /// Assassin.
    Assassin,
    /// Chaos magic.
    ChaosMagic,
    /// Warps reality.
    RealityWarping,
    /// Can shrink.
    Shrinking,
    /// Controls ants.
    AntControl,
    /// Former convict.
    ExCon,
    /// Has wings.
    Wings,
    /// Has stingers.
    Stings,
    /// Has a metal arm.
    MetalArm,
    /// Wears the gauntlet.
    Gauntlet,
    /// Hunts the Infinity Stones.
    InfinityStones,
    /// Powered by the Mind Stone.
    MindStone,
    /// Tied to vibranium.
    Vibranium,
    /// From New York.
    NewYork,
    /// From Wakanda.
    Wakanda,
    /// From Russia.
    Russia,
    /// Fought in World War II.
    WorldWar2,
    /// Thor's brother.
    ThorsBrother,
    /// Thanos's daughter.
    ThanosDaughter,
}

impl TraitTag {
    /// Every tag in priority order.
    pub const ALL: [TraitTag; 55] = [
        TraitTag::Avenger,
        TraitTag::Villain,
        TraitTag::Female,
        TraitTag::Human,
        TraitTag::Asgardian,
        TraitTag::Magic,
        TraitTag::SuperStrength,
        TraitTag::God,
        TraitTag::Alien,
        TraitTag::Mutant,
        TraitTag::Robot,
        TraitTag::Cyborg,
        TraitTag::Android,
        TraitTag::HumanLike,
        TraitTag::Hero,
        TraitTag::AntiHero,
        TraitTag::Male,
        TraitTag::SuperAgility,
        TraitTag::SuperSoldier,
        TraitTag::Genius,
        TraitTag::Scientist,
        TraitTag::Monster,
        TraitTag::GammaRadiation,
        TraitTag::PoweredSuit,
        TraitTag::Weaponry,
        TraitTag::Billionaire,
        TraitTag::WebShooter,
        TraitTag::Shield,
        TraitTag::Hammer,
        TraitTag::Lightning,
        TraitTag::Spy,
        TraitTag::Agent,
        TraitTag::Sorcerer,
        TraitTag::Doctor,
        TraitTag::King,
        TraitTag::Trickster,
        TraitTag::Assassin,
        TraitTag::ChaosMagic,
        TraitTag::RealityWarping,
        TraitTag::Shrinking,
        TraitTag::AntControl,
        TraitTag::ExCon,
        TraitTag::Wings,
        TraitTag::Stings,
        TraitTag::MetalArm,
        TraitTag::Gauntlet,
        TraitTag::InfinityStones,
        TraitTag::MindStone,
        TraitTag::Vibranium,
        TraitTag::NewYork,
        TraitTag::Wakanda,
        TraitTag::Russia,
        TraitTag::WorldWar2,
        TraitTag::ThorsBrother,
        TraitTag::ThanosDaughter,
    ];

    /// Canonical kebab-case name used by the catalogue format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Avenger => "avenger",
            Self::Villain => "villain",
            Self::Female => "female",
            Self::Human => "human",
            Self::Asgardian => "asgardian",
            Self::Magic => "magic",
            Self::SuperStrength => "super-strength",
            Self::God => "god",
            Self::Alien => "alien",
            Self::Mutant => "mutant",
            Self::Robot => "robot",
            Self::Cyborg => "cyborg",
            Self::Android => "android",
            Self::HumanLike => "human-like",
            Self::Hero => "hero",
            Self::AntiHero => "anti-hero",
            Self::Male => "male",
            Self::SuperAgility => "super-agility",
            Self::SuperSoldier => "super-soldier",
            Self::Genius => "genius",
            Self::Scientist => "scientist",
            Self::Monster => "monster",
            Self::GammaRadiation => "gamma-radiation",
            Self::PoweredSuit => "powered-suit",
            Self::Weaponry => "weaponry",
            Self::Billionaire => "billionaire",
            Self::WebShooter => "web-shooter",
            Self::Shield => "shield",
            Self::Hammer => "hammer",
            Self::Lightning => "lightning",
            Self::Spy => "spy",
            Self::Agent => "agent",
            Self::Sorcerer => "sorcerer",
            Self::Doctor => "doctor",
            Self::King => "king",
            Self::Trickster => "trickster",
            Self::Assassin => "assassin",
            Self::ChaosMagic => "chaos-magic",
            Self::RealityWarping => "reality-warping",
            Self::Shrinking => "shrinking",
            Self::AntControl => "ant-control",
            Self::ExCon => "ex-con",
            Self::Wings => "wings",
            Self::Stings => "stings",
            Self::MetalArm => "metal-arm",
            Self::Gauntlet => "gauntlet",
            Self::InfinityStones => "infinity-stones",
            Self::MindStone => "mind-stone",
            Self::Vibranium => "vibranium",
            Self::NewYork => "new-york",
            Self::Wakanda => "wakanda",
            Self::Russia => "russia",
            Self::WorldWar2 => "world-war-2",
            Self::ThorsBrother => "thors-brother",
            Self::ThanosDaughter => "thanos-daughter",
        }
    }

    /// The yes/no question the system asks about this tag.
    pub fn question(self) -> &'static str {
        match self {
            Self::Avenger => "Is your character a member of the Avengers?",
            Self::Villain => "Is your character a villain?",
            Self::Female => "Is your character female?",
            Self::Human => "Is your character human?",
            Self::Asgardian => "Is your character from Asgard?",
            Self::Magic => "Does your character use magic?",
            Self::SuperStrength => "Does your character have super strength?",
            Self::God => "Is your character a god?",
            Self::Alien => "Is your character an alien?",
            Self::Mutant => "Is your character a mutant?",
            Self::Robot => "Is your character a robot?",
            Self::Cyborg => "Is your character a cyborg?",
            Self::Android => "Is your character an android?",
            Self::HumanLike => "Does your character only look mostly human?",
            Self::Hero => "Is your character a hero?",
            Self::AntiHero => "Is your character an anti-hero?",
            Self::Male => "Is your character male?",
            Self::SuperAgility => "Does your character have super agility?",
            Self::SuperSoldier => "Is your character a super-soldier?",
            Self::Genius => "Is your character a genius?",
            Self::Scientist => "Is your character a scientist?",
            Self::Monster => "Does your character turn into a monster?",
            Self::GammaRadiation => "Did gamma radiation give your character powers?",
            Self::PoweredSuit => "Does your character fight in a powered suit?",
            Self::Weaponry => "Does your character rely on built-in weaponry?",
            Self::Billionaire => "Is your character a billionaire?",
            Self::WebShooter => "Does your character shoot webs?",
            Self::Shield => "Does your character carry a shield?",
            Self::Hammer => "Does your character wield a hammer?",
            Self::Lightning => "Can your character summon lightning?",
            Self::Spy => "Is your character a spy?",
            Self::Agent => "Does your character work as an agent?",
            Self::Sorcerer => "Is your character a sorcerer?",
            Self::Doctor => "Is your character a doctor?",
            Self::King => "Is your character a king?",
            Self::Trickster => "Is your character a trickster?",
            Self::Assassin => "Is your character an assassin?",
            Self::ChaosMagic => "Does your character wield chaos magic?",
            Self::RealityWarping => "Can your character warp reality?",
            Self::Shrinking => "Can your character shrink?",
            Self::AntControl => "Can your character control ants?",
            Self::ExCon => "Has your character been to prison?",
            Self::Wings => "Does your character have wings?",
            Self::Stings => "Can your character sting?",
            Self::MetalArm => "Does your character have a metal arm?",
            Self::Gauntlet => "Does your character wear a gauntlet?",
            Self::InfinityStones => "Is your character after the Infinity Stones?",
            Self::MindStone => "Is your character powered by the Mind Stone?",
            Self::Vibranium => "Is vibranium important to your character?",
            Self::NewYork => "Is your character from New York?",
            Self::Wakanda => "Is your character from Wakanda?",
            Self::Russia => "Is your character from Russia?",
            Self::WorldWar2 => "Did your character fight in World War II?",
            Self::ThorsBrother => "Is your character Thor's brother?",
            Self::ThanosDaughter => "Is your character Thanos's daughter?",
        }
    }

    /// Parse a tag from its catalogue name. Case, spaces, underscores, and
    /// apostrophes are ignored, so `"Thor's brother"` and `"SUPER_STRENGTH"`
    /// both resolve.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '\'')
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match normalized.as_str() {
            "avengers" => return Some(Self::Avenger),
            "world-war-ii" | "ww2" => return Some(Self::WorldWar2),
            _ => {}
        }
        Self::ALL.into_iter().find(|tag| tag.name() == normalized)
    }
}

impl std::fmt::Display for TraitTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TraitTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown trait: {s}"))
    }
}

impl TryFrom<String> for TraitTag {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TraitTag> for String {
    fn from(tag: TraitTag) -> Self {
        tag.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = TraitTag::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), TraitTag::ALL.len());
    }

    #[test]
    fn all_matches_declaration_order() {
        let mut sorted = TraitTag::ALL;
        sorted.sort();
        assert_eq!(sorted, TraitTag::ALL);
    }

    #[test]
    fn every_name_parses_back() {
        for tag in TraitTag::ALL {
            assert_eq!(TraitTag::parse(tag.name()), Some(tag), "{tag}");
        }
    }

    #[test]
    fn parse_is_lenient() {
        assert_eq!(TraitTag::parse("thor's-brother"), Some(TraitTag::ThorsBrother));
        assert_eq!(TraitTag::parse("Super Strength"), Some(TraitTag::SuperStrength));
        assert_eq!(TraitTag::parse("SUPER_AGILITY"), Some(TraitTag::SuperAgility));
        assert_eq!(TraitTag::parse("avengers"), Some(TraitTag::Avenger));
        assert_eq!(TraitTag::parse("healing-factor"), None);
    }

    #[test]
    fn questions_are_yes_no() {
        for tag in TraitTag::ALL {
            assert!(tag.question().ends_with('?'), "{tag}");
        }
    }

    #[test]
    fn serde_uses_catalogue_names() {
        let json = serde_json::to_string(&TraitTag::WorldWar2).unwrap();
        assert_eq!(json, "\"world-war-2\"");
        let tag: TraitTag = serde_json::from_str("\"gamma-radiation\"").unwrap();
        assert_eq!(tag, TraitTag::GammaRadiation);
        assert!(serde_json::from_str::<TraitTag>("\"flying\"").is_err());
    }
}
