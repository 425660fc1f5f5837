use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of a specific Mon.
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
pub enum Gender {
    #[string = "M"]
    #[alias = "Male"]
    #[default]
    Male,
    #[string = "F"]
    #[alias = "Female"]
    Female,
    #[string = "U"]
    #[alias = "Unknown"]
    Unknown,
}

impl Gender {
    /// The gender code stored on a save record.
    pub fn code(&self) -> u8 {
        match self {
            Self::Male => 0,
            Self::Female => 1,
            Self::Unknown => 2,
        }
    }

    /// Decodes a stored gender code.
    pub fn from_code(code: u8) -> Option<Gender> {
        match code {
            0 => Some(Self::Male),
            1 => Some(Self::Female),
            2 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Resolves a gender from a species gender ratio and a personality value.
    ///
    /// The gender ratio is one byte. 0 is male-only, 254 is female-only, and 255 is unknown.
    /// Every other ratio is compared against the personality's low byte: strictly lower means
    /// female.
    pub fn from_personality(gender_ratio: u8, personality: u32) -> Gender {
        match gender_ratio {
            0 => Self::Male,
            254 => Self::Female,
            255 => Self::Unknown,
            ratio => {
                if ((personality & 0xFF) as u8) < ratio {
                    Self::Female
                } else {
                    Self::Male
                }
            }
        }
    }
}
