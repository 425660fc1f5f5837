mod criteria;
mod definition;
mod matcher;
mod reconstruct;

pub use criteria::EncounterCriteria;
pub use definition::{
    EncounterCore,
    FixedEncounter,
    RANCH_ORIGIN_LOCATION,
    RanchSpecialEncounter,
    RanchTradeEncounter,
    Shininess,
    TradeEncounter,
};
pub use matcher::{
    EvolutionContext,
    find_origin,
    is_match,
};
pub use reconstruct::apply_details;
