use legality::{
    EncounterCriteria,
    EvolutionContext,
    FixedEncounter,
    MonRecord,
    Pk4Record,
    RanchSpecialEncounter,
    RanchTradeEncounter,
    SessionInfo,
    TradeEncounter,
    apply_details,
    find_origin,
    is_match,
};
use legality_data::{
    ContestStatTable,
    GameVersion,
    LanguageId,
    SpeciesId,
};
use legality_prng::ClassicLcrng;

fn session() -> SessionInfo {
    SessionInfo {
        tid: 12345,
        sid: 54321,
        ot_gender: 0,
        language: LanguageId::English,
        version: GameVersion::Diamond,
    }
}

fn abra_trade() -> FixedEncounter {
    let mut trade =
        TradeEncounter::new(0x0000008E, SpeciesId::ABRA, 1, GameVersion::DiamondPearl);
    trade.contest = ContestStatTable::from([10, 10, 10, 10, 10, 10]);
    FixedEncounter::Trade(trade)
}

fn reconstructed(encounter: &FixedEncounter) -> Pk4Record {
    let mut record = Pk4Record::new();
    let mut prng = ClassicLcrng::from_seed(0xBEEF);
    apply_details(
        encounter,
        &session(),
        &EncounterCriteria::default(),
        &mut prng,
        &mut record,
    )
    .unwrap();
    record
}

fn context_for(encounter: &FixedEncounter) -> EvolutionContext {
    EvolutionContext::new(encounter.species(), encounter.level())
}

#[test]
fn reconstructed_record_matches_its_definition() {
    let encounter = abra_trade();
    let record = reconstructed(&encounter);
    assert!(is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn personality_must_equal_fixed_value_exactly() {
    let encounter = abra_trade();
    let mut record = reconstructed(&encounter);
    record.set_personality(0x0000008F);
    assert!(!is_match(&encounter, &record, context_for(&encounter)));
    record.set_personality(0x0000008E);
    assert!(is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn contest_stats_gate_on_strict_floor() {
    let encounter = abra_trade();
    let mut record = reconstructed(&encounter);

    record.set_contest_stats(&ContestStatTable::from([10, 10, 10, 10, 10, 10]));
    assert!(is_match(&encounter, &record, context_for(&encounter)));

    // A single component below the baseline fails, even with the rest trained high.
    record.set_contest_stats(&ContestStatTable::from([10, 10, 10, 10, 10, 9]));
    assert!(!is_match(&encounter, &record, context_for(&encounter)));

    record.set_contest_stats(&ContestStatTable::from([255, 255, 255, 255, 255, 9]));
    assert!(!is_match(&encounter, &record, context_for(&encounter)));

    record.set_contest_stats(&ContestStatTable::from([30, 30, 30, 30, 30, 30]));
    assert!(is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn species_and_form_must_match_encounter_identity() {
    let encounter = abra_trade();
    let record = reconstructed(&encounter);
    let mut context = context_for(&encounter);
    context.species = SpeciesId::MACHOP;
    assert!(!is_match(&encounter, &record, context));

    let mut context = context_for(&encounter);
    context.form = 1;
    assert!(!is_match(&encounter, &record, context));
}

#[test]
fn level_below_encounter_floor_fails() {
    let mut trade =
        TradeEncounter::new(0x0001_0198, SpeciesId::CHATOT, 15, GameVersion::DiamondPearl);
    trade.contest = ContestStatTable::default();
    let encounter = FixedEncounter::Trade(trade);
    let record = reconstructed(&encounter);

    let mut context = context_for(&encounter);
    context.level = 14;
    assert!(!is_match(&encounter, &record, context));
    context.level = 15;
    assert!(is_match(&encounter, &record, context));
    context.level = 60;
    assert!(is_match(&encounter, &record, context));
}

#[test]
fn version_outside_definition_set_fails() {
    let encounter = abra_trade();
    let mut record = reconstructed(&encounter);

    // Platinum is outside the Diamond/Pearl pair this definition covers.
    record.set_origin_version(GameVersion::Platinum.code().unwrap());
    assert!(!is_match(&encounter, &record, context_for(&encounter)));

    record.set_origin_version(GameVersion::Pearl.code().unwrap());
    assert!(is_match(&encounter, &record, context_for(&encounter)));

    // An unknown version byte can never satisfy a version set.
    record.set_origin_version(0xEE);
    assert!(!is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn pinned_trainer_identity_must_match() {
    let mut trade =
        TradeEncounter::new(0x0000008E, SpeciesId::ABRA, 1, GameVersion::DiamondPearl);
    trade.core.tid = Some(25643);
    trade.core.sid = Some(0);
    let encounter = FixedEncounter::Trade(trade);
    let mut record = reconstructed(&encounter);

    assert_eq!(record.tid(), 25643);
    assert!(is_match(&encounter, &record, context_for(&encounter)));

    record.set_tid(1);
    assert!(!is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn ranch_trade_matches_on_fixed_personality_alone() {
    let encounter =
        FixedEncounter::RanchTrade(RanchTradeEncounter::new(0x0000D3A2, SpeciesId::MAGIKARP, 1));
    let mut record = reconstructed(&encounter);
    assert!(is_match(&encounter, &record, context_for(&encounter)));

    record.set_personality(0x0000D3A3);
    assert!(!is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn ranch_special_matches_without_identity_gate() {
    let encounter = FixedEncounter::RanchSpecial(RanchSpecialEncounter::new(SpeciesId::MEW, 50));
    let mut record = reconstructed(&encounter);
    assert!(is_match(&encounter, &record, context_for(&encounter)));

    // No fixed personality, so any value passes the identity gate.
    record.set_personality(0xFFFF_FFFF);
    assert!(is_match(&encounter, &record, context_for(&encounter)));
}

#[test]
fn matching_does_not_mutate_the_record() {
    let encounter = abra_trade();
    let record = reconstructed(&encounter);
    let before = *record.as_bytes();
    let _ = is_match(&encounter, &record, context_for(&encounter));
    assert_eq!(*record.as_bytes(), before);
}

#[test]
fn find_origin_returns_first_matching_definition() {
    let matching = abra_trade();
    let record = reconstructed(&matching);
    let catalog = vec![
        FixedEncounter::Trade(TradeEncounter::new(
            0x0001_0198,
            SpeciesId::CHATOT,
            15,
            GameVersion::DiamondPearl,
        )),
        matching.clone(),
        // Same shape as the match; scanning stops before it.
        abra_trade(),
    ];
    let found = find_origin(&catalog, &record, context_for(&matching)).unwrap();
    assert!(std::ptr::eq(found, &catalog[1]));
}

#[test]
fn find_origin_reports_unrecognized_records() {
    let encounter = abra_trade();
    let mut record = reconstructed(&encounter);
    record.set_personality(0xABCD_EF01);
    let catalog = vec![encounter.clone()];
    assert!(find_origin(&catalog, &record, context_for(&encounter)).is_none());
}
