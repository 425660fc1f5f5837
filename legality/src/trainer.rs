use legality_data::{
    GameVersion,
    LanguageId,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Read-only trainer and session context consulted during reconstruction.
///
/// Supplies the trainer identity stamped onto generated records and the language/version context
/// used to resolve region defaults.
pub trait TrainerInfo {
    fn tid(&self) -> u16;
    fn sid(&self) -> u16;
    /// OT gender code: 0 male, 1 female.
    fn ot_gender(&self) -> u8;
    fn language(&self) -> LanguageId;
    fn version(&self) -> GameVersion;
}

/// Owned session context for a loaded save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub tid: u16,
    pub sid: u16,
    pub ot_gender: u8,
    pub language: LanguageId,
    pub version: GameVersion,
}

impl TrainerInfo for SessionInfo {
    fn tid(&self) -> u16 {
        self.tid
    }

    fn sid(&self) -> u16 {
        self.sid
    }

    fn ot_gender(&self) -> u8 {
        self.ot_gender
    }

    fn language(&self) -> LanguageId {
        self.language
    }

    fn version(&self) -> GameVersion {
        self.version
    }
}
