use legality_data::{
    Ball,
    ContestStatTable,
    GameVersion,
    Gender,
    IvTable,
    SpeciesId,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The origin location stamped on ranch special gifts.
pub const RANCH_ORIGIN_LOCATION: u16 = 3000;

/// How an encounter constrains shininess.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Shininess {
    /// Shininess is rolled like any ordinary encounter.
    #[string = "Random"]
    #[default]
    Random,
    /// The encounter can never produce a shiny Mon.
    #[string = "Never"]
    Never,
    /// Shininess follows a hard-coded personality value.
    #[string = "Fixed"]
    Fixed,
}

/// Fields common to every fixed encounter definition.
///
/// A definition is immutable once the catalog is built. The matcher and reconstructor take
/// definitions by shared reference and never write through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterCore {
    pub species: SpeciesId,
    #[serde(default)]
    pub form: u8,
    pub level: u8,
    /// The version set this definition is valid for.
    pub version: GameVersion,
    #[serde(default)]
    pub ball: Ball,
    #[serde(default)]
    pub location: u16,
    /// Trainer ID pinned by the script, if any.
    #[serde(default)]
    pub tid: Option<u16>,
    /// Secret ID pinned by the script, if any.
    #[serde(default)]
    pub sid: Option<u16>,
    /// OT gender pinned by the script, if any. 0 male, 1 female.
    #[serde(default)]
    pub ot_gender: Option<u8>,
    /// Fixed gender, if the script pins one.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Packed ability selector. The low bit is reserved; the remaining bits select the slot.
    #[serde(default)]
    pub ability: u8,
    /// Fixed individual values, if the script pins them.
    #[serde(default)]
    pub ivs: Option<IvTable>,
    #[serde(default)]
    pub fateful: bool,
}

impl EncounterCore {
    /// Creates a definition core with no pinned trainer identity or stats.
    pub fn new(species: SpeciesId, level: u8, version: GameVersion) -> Self {
        Self {
            species,
            form: 0,
            level,
            version,
            ball: Ball::default(),
            location: 0,
            tid: None,
            sid: None,
            ot_gender: None,
            gender: None,
            ability: 0,
            ivs: None,
            fateful: false,
        }
    }

    /// The ability slot the packed selector resolves to.
    pub fn ability_slot(&self) -> u8 {
        self.ability >> 1
    }
}

/// A scripted in-game trade with a hard-coded personality value and contest baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEncounter {
    pub core: EncounterCore,
    /// The personality value the script always produces.
    pub personality: u32,
    /// Contest stats stamped at generation time. Stored records may only train above them.
    #[serde(default)]
    pub contest: ContestStatTable,
}

impl TradeEncounter {
    pub fn new(personality: u32, species: SpeciesId, level: u8, version: GameVersion) -> Self {
        Self {
            core: EncounterCore::new(species, level, version),
            personality,
            contest: ContestStatTable::default(),
        }
    }
}

/// A ranch trade gift with a hard-coded personality value and no contest baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RanchTradeEncounter {
    pub core: EncounterCore,
    /// The personality value the script always produces.
    pub personality: u32,
}

impl RanchTradeEncounter {
    pub fn new(personality: u32, species: SpeciesId, level: u8) -> Self {
        Self {
            core: EncounterCore::new(species, level, GameVersion::Diamond),
            personality,
        }
    }
}

/// A ranch special gift.
///
/// The personality value is generated rather than pinned; the ball, origin location, and OT
/// gender are overridden, and the fateful flag is forced during reconstruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RanchSpecialEncounter {
    pub core: EncounterCore,
}

impl RanchSpecialEncounter {
    pub fn new(species: SpeciesId, level: u8) -> Self {
        let mut core = EncounterCore::new(species, level, GameVersion::Diamond);
        core.ball = Ball::Cherish;
        core.location = RANCH_ORIGIN_LOCATION;
        core.ot_gender = Some(1);
        Self { core }
    }
}

/// A fixed encounter definition: one scripted in-game source of a Mon and the exact values it
/// can produce.
///
/// The behavioral families form a closed set; the matcher and reconstructor dispatch
/// exhaustively over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FixedEncounter {
    Trade(TradeEncounter),
    RanchTrade(RanchTradeEncounter),
    RanchSpecial(RanchSpecialEncounter),
}

impl FixedEncounter {
    /// The definition's common fields.
    pub fn core(&self) -> &EncounterCore {
        match self {
            Self::Trade(encounter) => &encounter.core,
            Self::RanchTrade(encounter) => &encounter.core,
            Self::RanchSpecial(encounter) => &encounter.core,
        }
    }

    pub fn species(&self) -> SpeciesId {
        self.core().species
    }

    pub fn level(&self) -> u8 {
        self.core().level
    }

    pub fn version(&self) -> GameVersion {
        self.core().version
    }

    /// The hard-coded personality value, for the families that carry one.
    pub fn personality(&self) -> Option<u32> {
        match self {
            Self::Trade(encounter) => Some(encounter.personality),
            Self::RanchTrade(encounter) => Some(encounter.personality),
            Self::RanchSpecial(_) => None,
        }
    }

    /// The fixed contest-stat baseline, for the families that carry one.
    pub fn contest_stats(&self) -> Option<&ContestStatTable> {
        match self {
            Self::Trade(encounter) => Some(&encounter.contest),
            Self::RanchTrade(_) | Self::RanchSpecial(_) => None,
        }
    }

    /// The shininess constraint the family implies.
    ///
    /// A hard-coded personality fixes shininess outright; ranch special gifts can never be
    /// shiny.
    pub fn shininess(&self) -> Shininess {
        match self {
            Self::Trade(_) | Self::RanchTrade(_) => Shininess::Fixed,
            Self::RanchSpecial(_) => Shininess::Never,
        }
    }
}

#[cfg(test)]
mod definition_test {
    use legality_data::{
        Ball,
        GameVersion,
        SpeciesId,
    };
    use pretty_assertions::assert_eq;

    use crate::{
        FixedEncounter,
        RANCH_ORIGIN_LOCATION,
        RanchSpecialEncounter,
        RanchTradeEncounter,
        Shininess,
        TradeEncounter,
    };

    #[test]
    fn trade_has_fixed_personality_and_contest_baseline() {
        let encounter = FixedEncounter::Trade(TradeEncounter::new(
            0x0000008E,
            SpeciesId::ABRA,
            1,
            GameVersion::DiamondPearl,
        ));
        assert_eq!(encounter.personality(), Some(0x0000008E));
        assert!(encounter.contest_stats().is_some());
        assert_eq!(encounter.shininess(), Shininess::Fixed);
    }

    #[test]
    fn ranch_trade_is_pinned_to_diamond() {
        let encounter =
            FixedEncounter::RanchTrade(RanchTradeEncounter::new(0x7E049E2A, SpeciesId::MEW, 50));
        assert_eq!(encounter.version(), GameVersion::Diamond);
        assert_eq!(encounter.contest_stats(), None);
        assert_eq!(encounter.shininess(), Shininess::Fixed);
    }

    #[test]
    fn ranch_special_overrides_ball_and_location() {
        let encounter =
            FixedEncounter::RanchSpecial(RanchSpecialEncounter::new(SpeciesId::PHIONE, 50));
        let core = encounter.core();
        assert_eq!(core.ball, Ball::Cherish);
        assert_eq!(core.location, RANCH_ORIGIN_LOCATION);
        assert_eq!(core.ot_gender, Some(1));
        assert_eq!(encounter.personality(), None);
        assert_eq!(encounter.shininess(), Shininess::Never);
    }

    #[test]
    fn ability_selector_resolves_slot() {
        let mut encounter =
            TradeEncounter::new(0x0000008E, SpeciesId::ABRA, 1, GameVersion::DiamondPearl);
        encounter.core.ability = 1;
        assert_eq!(encounter.core.ability_slot(), 0);
        encounter.core.ability = 2;
        assert_eq!(encounter.core.ability_slot(), 1);
    }

    #[test]
    fn serializes_to_tagged_json() {
        let encounter = FixedEncounter::RanchTrade(RanchTradeEncounter::new(
            0x0000D3A2,
            SpeciesId::MAGIKARP,
            1,
        ));
        let json = serde_json::to_string(&encounter).unwrap();
        let back = serde_json::from_str::<FixedEncounter>(&json).unwrap();
        assert_eq!(back, encounter);
    }
}
