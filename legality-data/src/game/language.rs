use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::GameVersion;

/// A language identifier, in main-series numbering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum LanguageId {
    #[string = "Hacked"]
    Hacked,
    #[string = "Japanese"]
    Japanese,
    #[string = "English"]
    English,
    #[string = "French"]
    French,
    #[string = "Italian"]
    Italian,
    #[string = "German"]
    German,
    /// Reserved slot between German and Spanish; never produced by a release.
    #[string = "Unused6"]
    Unused6,
    #[string = "Spanish"]
    Spanish,
    #[string = "Korean"]
    Korean,
    #[string = "ChineseS"]
    ChineseS,
    #[string = "ChineseT"]
    ChineseT,
}

impl LanguageId {
    /// The language byte stored on a save record.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Decodes a stored language byte.
    pub fn from_code(code: u8) -> Option<LanguageId> {
        match code {
            0 => Some(Self::Hacked),
            1 => Some(Self::Japanese),
            2 => Some(Self::English),
            3 => Some(Self::French),
            4 => Some(Self::Italian),
            5 => Some(Self::German),
            6 => Some(Self::Unused6),
            7 => Some(Self::Spanish),
            8 => Some(Self::Korean),
            9 => Some(Self::ChineseS),
            10 => Some(Self::ChineseT),
            _ => None,
        }
    }
}

/// A language identifier, in the numbering used by the console-family releases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum GcLanguageId {
    #[string = "Hacked"]
    Hacked,
    #[string = "Japanese"]
    Japanese,
    #[string = "English"]
    English,
    #[string = "German"]
    German,
    #[string = "French"]
    French,
    #[string = "Italian"]
    Italian,
    #[string = "Spanish"]
    Spanish,
    #[string = "Unused6"]
    Unused6,
}

impl GcLanguageId {
    /// The language byte stored on a console-family save record.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Decodes a stored console-family language byte.
    pub fn from_code(code: u8) -> Option<GcLanguageId> {
        match code {
            0 => Some(Self::Hacked),
            1 => Some(Self::Japanese),
            2 => Some(Self::English),
            3 => Some(Self::German),
            4 => Some(Self::French),
            5 => Some(Self::Italian),
            6 => Some(Self::Spanish),
            7 => Some(Self::Unused6),
            _ => None,
        }
    }
}

/// All languages a release has ever shipped with, ordered by introduction.
const LANGUAGES: [LanguageId; 9] = [
    LanguageId::Japanese,
    LanguageId::English,
    LanguageId::French,
    LanguageId::German,
    LanguageId::Spanish,
    LanguageId::Italian,
    LanguageId::Korean,
    LanguageId::ChineseS,
    LanguageId::ChineseT,
];

const SAFE_LANGUAGE: LanguageId = LanguageId::English;

/// The ordered set of languages available on the given generation's hardware.
///
/// Generations 1 and 3 shipped without Korean. Generations 2, 4, 5, and 6 shipped with Korean but
/// before the Chinese variants existed. Everything later carries the full set.
pub fn available_languages(generation: u8) -> &'static [LanguageId] {
    match generation {
        1 | 3 => &LANGUAGES[..6],
        2 | 4 | 5 | 6 => &LANGUAGES[..7],
        _ => &LANGUAGES,
    }
}

fn permitted(set: &[LanguageId], language: LanguageId) -> bool {
    set.contains(&language)
}

/// Resolves a preferred language against the languages the given generation and version can
/// legitimately produce, falling back to English.
///
/// Generation 1 with the Japan-only release is always Japanese. Generation 2 honors Korean only
/// on the one release that shipped in Korean.
pub fn safe_language(generation: u8, prefer: LanguageId, version: GameVersion) -> LanguageId {
    match generation {
        1 if version == GameVersion::BlueJp => LanguageId::Japanese,
        1 | 3 => {
            if permitted(&LANGUAGES[..6], prefer) {
                prefer
            } else {
                SAFE_LANGUAGE
            }
        }
        2 => {
            if permitted(&LANGUAGES[..7], prefer)
                && (prefer != LanguageId::Korean || version == GameVersion::Crystal)
            {
                prefer
            } else {
                SAFE_LANGUAGE
            }
        }
        4 | 5 | 6 => {
            if permitted(&LANGUAGES[..7], prefer) {
                prefer
            } else {
                SAFE_LANGUAGE
            }
        }
        _ => {
            if permitted(&LANGUAGES, prefer) {
                prefer
            } else {
                SAFE_LANGUAGE
            }
        }
    }
}

/// Remaps a console-family language byte to main-series numbering.
///
/// Only German, French, Italian, Spanish, and the reserved slot differ between the two
/// numberings; every other value passes through unchanged.
pub fn gc_to_main(value: u8) -> u8 {
    match GcLanguageId::from_code(value) {
        Some(GcLanguageId::German) => LanguageId::German.code(),
        Some(GcLanguageId::French) => LanguageId::French.code(),
        Some(GcLanguageId::Italian) => LanguageId::Italian.code(),
        Some(GcLanguageId::Spanish) => LanguageId::Spanish.code(),
        Some(GcLanguageId::Unused6) => LanguageId::Unused6.code(),
        _ => value,
    }
}

/// Remaps a main-series language byte to console-family numbering.
///
/// Inverse of [`gc_to_main`]; unmapped values pass through unchanged.
pub fn main_to_gc(value: u8) -> u8 {
    match LanguageId::from_code(value) {
        Some(LanguageId::German) => GcLanguageId::German.code(),
        Some(LanguageId::French) => GcLanguageId::French.code(),
        Some(LanguageId::Italian) => GcLanguageId::Italian.code(),
        Some(LanguageId::Spanish) => GcLanguageId::Spanish.code(),
        Some(LanguageId::Unused6) => GcLanguageId::Unused6.code(),
        _ => value,
    }
}

#[cfg(test)]
mod language_test {
    use crate::{
        LanguageId,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(LanguageId::Japanese, "Japanese");
        test_string_serialization(LanguageId::English, "English");
        test_string_serialization(LanguageId::ChineseT, "ChineseT");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("german", LanguageId::German);
        test_string_deserialization("korean", LanguageId::Korean);
    }

    #[test]
    fn language_codes_round_trip() {
        for code in 0..=10 {
            assert_eq!(LanguageId::from_code(code).unwrap().code(), code);
        }
        assert_eq!(LanguageId::from_code(11), None);
    }
}
