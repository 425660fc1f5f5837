use legality_data::{
    GameVersion,
    SpeciesId,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    FixedEncounter,
    record::MonRecord,
};

/// The identity a stored record had at encounter time.
///
/// Evolution moves a record away from the species the script produced, so the caller walks the
/// evolution chain and supplies the devolved identity here. The level is the highest level the
/// record could have held at that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionContext {
    pub species: SpeciesId,
    #[serde(default)]
    pub form: u8,
    pub level: u8,
}

impl EvolutionContext {
    pub fn new(species: SpeciesId, level: u8) -> Self {
        Self {
            species,
            form: 0,
            level,
        }
    }
}

/// Checks whether a stored record could have originated from the given encounter definition.
///
/// Matching is pure: neither the record nor the definition is mutated, and no cross-candidate
/// ranking is performed. Several definitions may match the same record; disambiguation is the
/// caller's concern.
pub fn is_match(
    encounter: &FixedEncounter,
    record: &impl MonRecord,
    context: EvolutionContext,
) -> bool {
    let core = encounter.core();
    if context.species != core.species || context.form != core.form {
        return false;
    }
    if context.level < core.level {
        return false;
    }
    let Some(version) = GameVersion::from_code(record.origin_version()) else {
        return false;
    };
    if !core.version.contains(version) {
        return false;
    }
    if let Some(tid) = core.tid {
        if record.tid() != tid {
            return false;
        }
    }
    if let Some(sid) = core.sid {
        if record.sid() != sid {
            return false;
        }
    }
    if let Some(baseline) = encounter.contest_stats() {
        // Contest stats only train upward from the stamped baseline.
        if record.contest_stats().below(baseline) {
            return false;
        }
    }
    match encounter.personality() {
        Some(personality) => record.personality() == personality,
        // Families without a fixed personality match on the checks above alone; their declared
        // shininess policy is validated by the caller.
        None => true,
    }
}

/// Scans a catalog slice and returns the first matching definition.
pub fn find_origin<'a>(
    catalog: &'a [FixedEncounter],
    record: &impl MonRecord,
    context: EvolutionContext,
) -> Option<&'a FixedEncounter> {
    catalog
        .iter()
        .find(|encounter| is_match(encounter, record, context))
}
