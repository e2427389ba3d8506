//! # Kairaku Core Library
//!
//! This library provides the core logic for Kairaku, a single-user habit
//! tracker: the user lists the escape habits they want to cut back on, the
//! meaningful activities they would rather do, and what they aspire to. The
//! library suggests meaningful activities that fit the current part of the
//! day and keeps a log of completions.
//!
//! ## Architecture
//!
//! - **Model**: [`User`], [`Activity`], [`CompletionEvent`]
//! - **Suggestion engine**: time resolver, eligibility filter, random
//!   selector and reason generator, all driven by an injected random source
//! - **Storage**: JSON records in a key-value store (SQLite `kv` table) and
//!   TOML configuration
//! - **History and screens**: derived, non-persisted views over the records
//!
//! ## Key Components
//!
//! - [`SuggestionEngine`]: seeded or entropy-backed suggestion generator
//! - [`ProfileStore`]: typed access to the persisted records
//! - [`Database`]: SQLite key-value backend
//! - [`Config`]: Application configuration management

pub mod error;
pub mod history;
pub mod model;
pub mod screen;
pub mod storage;
pub mod suggest;

pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use history::{ActivityTotals, CategoryFilter, HistoryDay, HistoryEntry};
pub use model::{
    Activity, ActivityDraft, ActivitySuggestion, CompletionEvent, TimeOfDay, User,
    ESCAPE_CATEGORY, PRESET_CATEGORIES,
};
pub use screen::{ActivitiesScreen, HomeScreen, ProfileScreen, View};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, ProfileStore};
pub use suggest::{generate_suggestions, SuggestionEngine, TimeOfDayWatcher};
