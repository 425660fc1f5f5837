use anyhow::Result;
use legality_data::{
    GameVersion,
    Gender,
    IvTable,
    LanguageId,
    Nature,
    SpeciesId,
    safe_language,
    species_data,
};
use legality_prng::{
    RandomSource,
    rand_util,
};
use log::debug;

use crate::{
    EncounterCriteria,
    FixedEncounter,
    Shininess,
    error::{
        precondition_error,
        range_error,
    },
    record::MonRecord,
    trainer::TrainerInfo,
};

/// Number of personality rolls attempted before an unsatisfiable request falls back to the
/// final roll.
const PERSONALITY_ROLL_LIMIT: usize = 0x10000;

/// Populates the target record's derived fields from an encounter definition.
///
/// Runs in two ordered phases: common fields and version-family language quirks first, then
/// identity and individual values. An error is a precondition violation (a pairing that should
/// not have reached this call); nothing is retried or rolled back.
pub fn apply_details(
    encounter: &FixedEncounter,
    trainer: &impl TrainerInfo,
    criteria: &EncounterCriteria,
    prng: &mut dyn RandomSource,
    record: &mut impl MonRecord,
) -> Result<()> {
    apply_common(encounter, trainer, record);
    apply_language_quirks(encounter, record);
    if let Some(baseline) = encounter.contest_stats() {
        // The write side stamps the exact baseline; the matcher's floor applies only to stored
        // records that have since trained upward.
        record.set_contest_stats(baseline);
    }
    if matches!(encounter, FixedEncounter::RanchSpecial(_)) {
        record.set_fateful_encounter(true);
    }
    apply_identity(encounter, criteria, prng, record)
}

fn apply_common(
    encounter: &FixedEncounter,
    trainer: &impl TrainerInfo,
    record: &mut impl MonRecord,
) {
    let core = encounter.core();
    record.set_species(core.species);
    record.set_form(core.form);
    record.set_level(core.level);
    record.set_met_level(core.level);
    record.set_origin_location(core.location);
    record.set_ball(core.ball.code());
    let version = if core.version.contains(trainer.version()) {
        trainer.version()
    } else {
        core.version.preferred_single()
    };
    if let Some(code) = version.code() {
        record.set_origin_version(code);
    }
    record.set_tid(core.tid.unwrap_or_else(|| trainer.tid()));
    record.set_sid(core.sid.unwrap_or_else(|| trainer.sid()));
    record.set_ot_gender(core.ot_gender.unwrap_or_else(|| trainer.ot_gender()));
    record.set_fateful_encounter(core.fateful);
    let generation = core.version.generation();
    record.set_language(safe_language(generation, trainer.language(), core.version).code());
}

/// Rewrites the stamped language the way the version family's script does.
///
/// These tables are reproduced from the source games' observed behavior and must not be
/// approximated.
fn apply_language_quirks(encounter: &FixedEncounter, record: &mut impl MonRecord) {
    let FixedEncounter::Trade(trade) = encounter else {
        return;
    };
    let core = &trade.core;
    let english = LanguageId::English.code();
    if GameVersion::DiamondPearlPlatinum.contains(core.version) {
        let german = LanguageId::German.code();
        if core.species == SpeciesId::MAGIKARP {
            // Tagged German everywhere except German origin, which reads English.
            let language = if record.language() == german {
                english
            } else {
                german
            };
            record.set_language(language);
        } else if record.language() == english {
            // English origin carries a Japanese tag; there is no reverse rewrite.
            record.set_language(LanguageId::Japanese.code());
        }
    } else if GameVersion::HeartGoldSoulSilver.contains(core.version)
        && core.species == SpeciesId::PIKACHU
    {
        // Tagged English everywhere except English origin, which reads French.
        let language = if record.language() == english {
            LanguageId::French.code()
        } else {
            english
        };
        record.set_language(language);
    }
}

fn apply_identity(
    encounter: &FixedEncounter,
    criteria: &EncounterCriteria,
    prng: &mut dyn RandomSource,
    record: &mut impl MonRecord,
) -> Result<()> {
    let core = encounter.core();
    let species = species_data(core.species).ok_or_else(|| {
        debug!("species {} is not in the registry", core.species);
        precondition_error(format!("species {} is not in the registry", core.species))
    })?;
    let personality = match encounter.personality() {
        Some(personality) => personality,
        None => roll_personality(
            prng,
            criteria,
            species.gender_ratio,
            record.tid(),
            record.sid(),
            encounter.shininess(),
        ),
    };
    // Nature has no independent field; it follows from the personality value.
    record.set_personality(personality);
    let gender = core
        .gender
        .unwrap_or_else(|| Gender::from_personality(species.gender_ratio, personality));
    record.set_gender(gender);
    let slot = core.ability_slot();
    if usize::from(slot) >= species.abilities.len() {
        return Err(range_error("ability slot", usize::from(slot)));
    }
    record.set_ability(slot, false);
    let ivs = match core.ivs {
        Some(ivs) => ivs,
        None => IvTable::from(rand_util::individual_values(prng)),
    };
    record.set_ivs(&ivs);
    Ok(())
}

/// Rolls a personality value for a definition that does not pin one, honoring the criteria
/// where the species and shininess policy leave freedom.
fn roll_personality(
    prng: &mut dyn RandomSource,
    criteria: &EncounterCriteria,
    gender_ratio: u8,
    tid: u16,
    sid: u16,
    shininess: Shininess,
) -> u32 {
    let mut personality = rand_util::personality(prng);
    for _ in 0..PERSONALITY_ROLL_LIMIT {
        if roll_acceptable(personality, criteria, gender_ratio, tid, sid, shininess) {
            return personality;
        }
        personality = rand_util::personality(prng);
    }
    debug!("personality roll limit reached; keeping the final roll");
    personality
}

fn roll_acceptable(
    personality: u32,
    criteria: &EncounterCriteria,
    gender_ratio: u8,
    tid: u16,
    sid: u16,
    shininess: Shininess,
) -> bool {
    if let Some(nature) = criteria.nature {
        if Nature::from_personality(personality) != nature {
            return false;
        }
    }
    if let Some(gender) = criteria.gender {
        // Fixed-ratio species leave no gender freedom for the request to bias.
        if matches!(gender_ratio, 1..=253)
            && Gender::from_personality(gender_ratio, personality) != gender
        {
            return false;
        }
    }
    let xor = tid ^ sid ^ (personality >> 16) as u16 ^ (personality & 0xFFFF) as u16;
    let shiny = xor < 8;
    match shininess {
        Shininess::Never => !shiny,
        Shininess::Random => criteria.shiny.is_none_or(|want| want == shiny),
        // A fixed-shininess definition carries a fixed personality; nothing is rolled for it.
        Shininess::Fixed => true,
    }
}
