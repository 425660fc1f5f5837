use legality_data::{
    Gender,
    Nature,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Caller-requested attributes for freshly generated encounter fields.
///
/// Criteria bias only the freedom a definition leaves. A hard-coded personality value fixes
/// nature, gender, and shininess outright, so requests against such a definition are ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncounterCriteria {
    #[serde(default)]
    pub nature: Option<Nature>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub ability_slot: Option<u8>,
    #[serde(default)]
    pub shiny: Option<bool>,
}
