use legality_data::{
    ContestStatTable,
    Gender,
    IvTable,
    Nature,
    SpeciesId,
};

/// Field access to a stored Mon record.
///
/// This is the engine's only view of a record: the matcher reads through it and the
/// reconstructor writes through it. The backing layout (save block, network message, test
/// double) is the implementor's concern.
///
/// Language and origin-version accessors traffic in raw stored bytes, since stored data may
/// carry values outside the known identifier sets.
pub trait MonRecord {
    fn species(&self) -> SpeciesId;
    fn set_species(&mut self, species: SpeciesId);

    fn form(&self) -> u8;
    fn set_form(&mut self, form: u8);

    fn level(&self) -> u8;
    fn set_level(&mut self, level: u8);

    /// The 32-bit personality value, which derives nature, gender, and shininess.
    fn personality(&self) -> u32;
    fn set_personality(&mut self, personality: u32);

    fn language(&self) -> u8;
    fn set_language(&mut self, language: u8);

    fn gender(&self) -> Gender;
    fn set_gender(&mut self, gender: Gender);

    /// The resolved ability slot index.
    fn ability_slot(&self) -> u8;
    /// Whether the record carries its hidden ability rather than a regular slot.
    fn hidden_ability(&self) -> bool;
    fn set_ability(&mut self, slot: u8, hidden: bool);

    fn ivs(&self) -> IvTable;
    fn set_ivs(&mut self, ivs: &IvTable);

    fn contest_stats(&self) -> ContestStatTable;
    fn set_contest_stats(&mut self, stats: &ContestStatTable);

    fn ball(&self) -> u8;
    fn set_ball(&mut self, ball: u8);

    fn origin_location(&self) -> u16;
    fn set_origin_location(&mut self, location: u16);

    fn met_level(&self) -> u8;
    fn set_met_level(&mut self, level: u8);

    fn fateful_encounter(&self) -> bool;
    fn set_fateful_encounter(&mut self, fateful: bool);

    fn held_item(&self) -> u16;
    fn set_held_item(&mut self, item: u16);

    fn origin_version(&self) -> u8;
    fn set_origin_version(&mut self, version: u8);

    fn tid(&self) -> u16;
    fn set_tid(&mut self, tid: u16);

    fn sid(&self) -> u16;
    fn set_sid(&mut self, sid: u16);

    /// OT gender code: 0 male, 1 female.
    fn ot_gender(&self) -> u8;
    fn set_ot_gender(&mut self, gender: u8);

    /// The nature the record's personality value derives.
    ///
    /// No independent nature field exists in the generations this engine covers.
    fn nature(&self) -> Nature {
        Nature::from_personality(self.personality())
    }

    /// Shiny state, derived from trainer identity and the personality halves.
    fn is_shiny(&self) -> bool {
        let personality = self.personality();
        let xor = self.tid()
            ^ self.sid()
            ^ (personality >> 16) as u16
            ^ (personality & 0xFFFF) as u16;
        xor < 8
    }
}
