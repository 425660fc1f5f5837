use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A game version, or a closed set of game versions.
///
/// Encounter definitions are valid for a set of versions, so set values (such as
/// [`DiamondPearlPlatinum`][`GameVersion::DiamondPearlPlatinum`]) appear alongside the individual
/// releases. Set membership is checked with [`contains`][`GameVersion::contains`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum GameVersion {
    #[string = "R"]
    #[alias = "Red"]
    Red,
    #[string = "B"]
    #[alias = "Blue"]
    Blue,
    /// The Japan-only release paired with Red and Green.
    #[string = "BU"]
    #[alias = "BlueJp"]
    BlueJp,
    #[string = "Y"]
    #[alias = "Yellow"]
    Yellow,
    #[string = "GD"]
    #[alias = "Gold"]
    Gold,
    #[string = "SV"]
    #[alias = "Silver"]
    Silver,
    #[string = "C"]
    #[alias = "Crystal"]
    Crystal,
    #[string = "D"]
    #[alias = "Diamond"]
    Diamond,
    #[string = "P"]
    #[alias = "Pearl"]
    Pearl,
    #[string = "Pt"]
    #[alias = "Platinum"]
    Platinum,
    #[string = "HG"]
    #[alias = "HeartGold"]
    HeartGold,
    #[string = "SS"]
    #[alias = "SoulSilver"]
    SoulSilver,
    #[string = "DP"]
    DiamondPearl,
    #[string = "DPPt"]
    DiamondPearlPlatinum,
    #[string = "HGSS"]
    HeartGoldSoulSilver,
    #[string = "Gen4"]
    Gen4,
    #[string = "Any"]
    Any,
}

impl GameVersion {
    /// The generation the version belongs to.
    ///
    /// Set values report the generation shared by their members. [`Any`][`GameVersion::Any`] has
    /// no generation and reports zero.
    pub fn generation(&self) -> u8 {
        match self {
            Self::Red | Self::Blue | Self::BlueJp | Self::Yellow => 1,
            Self::Gold | Self::Silver | Self::Crystal => 2,
            Self::Diamond
            | Self::Pearl
            | Self::Platinum
            | Self::HeartGold
            | Self::SoulSilver
            | Self::DiamondPearl
            | Self::DiamondPearlPlatinum
            | Self::HeartGoldSoulSilver
            | Self::Gen4 => 4,
            Self::Any => 0,
        }
    }

    /// Checks whether the version set contains the given version.
    ///
    /// An individual release contains only itself. A set value contains its member releases and
    /// any subset.
    pub fn contains(&self, other: GameVersion) -> bool {
        match self {
            Self::Any => true,
            Self::DiamondPearl => {
                matches!(other, Self::Diamond | Self::Pearl | Self::DiamondPearl)
            }
            Self::DiamondPearlPlatinum => matches!(
                other,
                Self::Diamond
                    | Self::Pearl
                    | Self::Platinum
                    | Self::DiamondPearl
                    | Self::DiamondPearlPlatinum
            ),
            Self::HeartGoldSoulSilver => matches!(
                other,
                Self::HeartGold | Self::SoulSilver | Self::HeartGoldSoulSilver
            ),
            Self::Gen4 => other != Self::Any && other.generation() == 4,
            _ => *self == other,
        }
    }

    /// The version byte stored on a save record.
    ///
    /// Set values have no stored representation.
    pub fn code(&self) -> Option<u8> {
        match self {
            Self::HeartGold => Some(7),
            Self::SoulSilver => Some(8),
            Self::Diamond => Some(10),
            Self::Pearl => Some(11),
            Self::Platinum => Some(12),
            Self::Red => Some(35),
            Self::BlueJp => Some(37),
            Self::Blue => Some(36),
            Self::Yellow => Some(38),
            Self::Gold => Some(39),
            Self::Silver => Some(40),
            Self::Crystal => Some(41),
            _ => None,
        }
    }

    /// Decodes a stored version byte.
    pub fn from_code(code: u8) -> Option<GameVersion> {
        match code {
            7 => Some(Self::HeartGold),
            8 => Some(Self::SoulSilver),
            10 => Some(Self::Diamond),
            11 => Some(Self::Pearl),
            12 => Some(Self::Platinum),
            35 => Some(Self::Red),
            36 => Some(Self::Blue),
            37 => Some(Self::BlueJp),
            38 => Some(Self::Yellow),
            39 => Some(Self::Gold),
            40 => Some(Self::Silver),
            41 => Some(Self::Crystal),
            _ => None,
        }
    }

    /// The individual release used when a set value must resolve to a single stored version.
    pub fn preferred_single(&self) -> GameVersion {
        match self {
            Self::DiamondPearl | Self::DiamondPearlPlatinum | Self::Gen4 => Self::Diamond,
            Self::HeartGoldSoulSilver => Self::HeartGold,
            _ => *self,
        }
    }
}
