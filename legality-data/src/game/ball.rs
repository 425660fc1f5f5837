use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The ball a Mon was caught or gifted in.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Ball {
    #[string = "Master"]
    Master,
    #[string = "Ultra"]
    Ultra,
    #[string = "Great"]
    Great,
    #[string = "Poke"]
    #[default]
    Poke,
    #[string = "Safari"]
    Safari,
    #[string = "Net"]
    Net,
    #[string = "Dive"]
    Dive,
    #[string = "Nest"]
    Nest,
    #[string = "Repeat"]
    Repeat,
    #[string = "Timer"]
    Timer,
    #[string = "Luxury"]
    Luxury,
    #[string = "Premier"]
    Premier,
    #[string = "Dusk"]
    Dusk,
    #[string = "Heal"]
    Heal,
    #[string = "Quick"]
    Quick,
    /// Marks distribution and other scripted gift Mons.
    #[string = "Cherish"]
    Cherish,
}

impl Ball {
    /// The ball byte stored on a save record.
    pub fn code(&self) -> u8 {
        match self {
            Self::Master => 1,
            Self::Ultra => 2,
            Self::Great => 3,
            Self::Poke => 4,
            Self::Safari => 5,
            Self::Net => 6,
            Self::Dive => 7,
            Self::Nest => 8,
            Self::Repeat => 9,
            Self::Timer => 10,
            Self::Luxury => 11,
            Self::Premier => 12,
            Self::Dusk => 13,
            Self::Heal => 14,
            Self::Quick => 15,
            Self::Cherish => 16,
        }
    }

    /// Decodes a stored ball byte.
    pub fn from_code(code: u8) -> Option<Ball> {
        match code {
            1 => Some(Self::Master),
            2 => Some(Self::Ultra),
            3 => Some(Self::Great),
            4 => Some(Self::Poke),
            5 => Some(Self::Safari),
            6 => Some(Self::Net),
            7 => Some(Self::Dive),
            8 => Some(Self::Nest),
            9 => Some(Self::Repeat),
            10 => Some(Self::Timer),
            11 => Some(Self::Luxury),
            12 => Some(Self::Premier),
            13 => Some(Self::Dusk),
            14 => Some(Self::Heal),
            15 => Some(Self::Quick),
            16 => Some(Self::Cherish),
            _ => None,
        }
    }
}
