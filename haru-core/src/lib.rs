//! HARU Core - Shared Types
//!
//! Foundation crate for the haru daily-content service. Contains the
//! content-day clock, the per-kind record shapes, and the error taxonomy.
//! All other crates depend on this; it depends on nothing internal.

pub mod day;
pub mod error;
pub mod record;

pub use day::{content_day, day_of_year, Clock, SystemClock, CONTENT_OFFSET_HOURS};
pub use error::{ConfigError, GenerationError, HaruError, HaruResult, StoreError};
pub use record::{
    HistoryRecord, LiteratureRecord, VocabWord, VocabularyRecord, CREATED_AT_FIELD,
};
