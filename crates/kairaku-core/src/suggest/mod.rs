//! Suggestion engine.
//!
//! A pure pipeline over a [`User`](crate::model::User):
//!
//! 1. [`time`] resolves the wall-clock hour to a [`TimeOfDay`](crate::model::TimeOfDay)
//! 2. [`select::eligible_activities`] keeps meaningful activities that fit it
//! 3. [`select::select_random`] samples a few of those without replacement
//! 4. [`reason::reason_for`] attaches a sentence to each pick
//!
//! Randomness is always injected, so a seeded generator reproduces the exact
//! same suggestions.

pub mod engine;
pub mod reason;
pub mod select;
pub mod time;

pub use engine::{generate_suggestions, SuggestionEngine, DEFAULT_SUGGESTION_COUNT};
pub use reason::{reason_for, ESCAPE_FALLBACK};
pub use select::{eligible_activities, select_random};
pub use time::{current_time_of_day, time_of_day_at, time_of_day_for_hour, TimeOfDayWatcher};
