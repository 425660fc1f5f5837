use core::fmt;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use serde::{
    Deserialize,
    Serialize,
};

/// A species, identified by national index number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    pub const PIKACHU: SpeciesId = SpeciesId(25);
    pub const ABRA: SpeciesId = SpeciesId(63);
    pub const MACHOP: SpeciesId = SpeciesId(66);
    pub const HAUNTER: SpeciesId = SpeciesId(93);
    pub const ONIX: SpeciesId = SpeciesId(95);
    pub const MAGIKARP: SpeciesId = SpeciesId(129);
    pub const MEW: SpeciesId = SpeciesId(151);
    pub const MEDICHAM: SpeciesId = SpeciesId(308);
    pub const BUIZEL: SpeciesId = SpeciesId(418);
    pub const CHATOT: SpeciesId = SpeciesId(441);
    pub const FINNEON: SpeciesId = SpeciesId(456);
    pub const PHIONE: SpeciesId = SpeciesId(489);
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data about a particular species.
///
/// Only the subset the legality engine consults lives here: fields that do not feed gender or
/// ability resolution belong elsewhere. The table is authored in code, so entries borrow static
/// names and serialize one way for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesData {
    /// The name of the species.
    pub name: &'static str,
    /// Gender ratio.
    ///
    /// Gender ratio is represented as one byte. There are three special values:
    /// - 0 = male only
    /// - 254 = female only
    /// - 255 = gender unknown
    ///
    /// Otherwise, the ratio is compared against the personality's low byte; strictly lower means
    /// female.
    pub gender_ratio: u8,
    /// The two regular ability slots. Species with a single ability repeat it in both slots.
    pub abilities: [&'static str; 2],
}

static REGISTRY: Lazy<HashMap<SpeciesId, SpeciesData>> = Lazy::new(|| {
    HashMap::from_iter([
        (
            SpeciesId::PIKACHU,
            SpeciesData {
                name: "Pikachu",
                gender_ratio: 127,
                abilities: ["Static", "Static"],
            },
        ),
        (
            SpeciesId::ABRA,
            SpeciesData {
                name: "Abra",
                gender_ratio: 63,
                abilities: ["Synchronize", "Inner Focus"],
            },
        ),
        (
            SpeciesId::MACHOP,
            SpeciesData {
                name: "Machop",
                gender_ratio: 63,
                abilities: ["Guts", "No Guard"],
            },
        ),
        (
            SpeciesId::HAUNTER,
            SpeciesData {
                name: "Haunter",
                gender_ratio: 127,
                abilities: ["Levitate", "Levitate"],
            },
        ),
        (
            SpeciesId::ONIX,
            SpeciesData {
                name: "Onix",
                gender_ratio: 127,
                abilities: ["Rock Head", "Sturdy"],
            },
        ),
        (
            SpeciesId::MAGIKARP,
            SpeciesData {
                name: "Magikarp",
                gender_ratio: 127,
                abilities: ["Swift Swim", "Swift Swim"],
            },
        ),
        (
            SpeciesId::MEW,
            SpeciesData {
                name: "Mew",
                gender_ratio: 255,
                abilities: ["Synchronize", "Synchronize"],
            },
        ),
        (
            SpeciesId::MEDICHAM,
            SpeciesData {
                name: "Medicham",
                gender_ratio: 127,
                abilities: ["Pure Power", "Pure Power"],
            },
        ),
        (
            SpeciesId::BUIZEL,
            SpeciesData {
                name: "Buizel",
                gender_ratio: 127,
                abilities: ["Swift Swim", "Swift Swim"],
            },
        ),
        (
            SpeciesId::CHATOT,
            SpeciesData {
                name: "Chatot",
                gender_ratio: 127,
                abilities: ["Keen Eye", "Tangled Feet"],
            },
        ),
        (
            SpeciesId::FINNEON,
            SpeciesData {
                name: "Finneon",
                gender_ratio: 127,
                abilities: ["Swift Swim", "Storm Drain"],
            },
        ),
        (
            SpeciesId::PHIONE,
            SpeciesData {
                name: "Phione",
                gender_ratio: 255,
                abilities: ["Hydration", "Hydration"],
            },
        ),
    ])
});

/// Looks up species data by ID.
///
/// The registry is built once, before first use, and never mutated afterward.
pub fn species_data(species: SpeciesId) -> Option<&'static SpeciesData> {
    REGISTRY.get(&species)
}

#[cfg(test)]
mod species_test {
    use pretty_assertions::assert_eq;

    use crate::{
        SpeciesId,
        species_data,
    };

    #[test]
    fn looks_up_registered_species() {
        let data = species_data(SpeciesId::MAGIKARP).unwrap();
        assert_eq!(data.name, "Magikarp");
        assert_eq!(data.gender_ratio, 127);
    }

    #[test]
    fn unregistered_species_is_absent() {
        assert_eq!(species_data(SpeciesId(10000)), None);
    }

    #[test]
    fn single_ability_species_repeats_the_slot() {
        let data = species_data(SpeciesId::HAUNTER).unwrap();
        assert_eq!(data.abilities[0], data.abilities[1]);
    }
}
