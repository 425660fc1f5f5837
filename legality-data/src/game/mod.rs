mod ball;
mod language;
mod version;

pub use ball::Ball;
pub use language::{
    GcLanguageId,
    LanguageId,
    available_languages,
    gc_to_main,
    main_to_gc,
    safe_language,
};
pub use version::GameVersion;
