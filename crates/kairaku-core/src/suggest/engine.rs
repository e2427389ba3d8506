//! Suggestion pipeline: resolve time, filter, sample, explain.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use super::reason::reason_for;
use super::select::{eligible_activities, select_random};
use crate::model::{ActivitySuggestion, TimeOfDay, User};

/// Number of suggestions produced when nothing else is configured.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Suggest up to `count` meaningful activities that fit `time`.
///
/// No profile, no meaningful activities, or nothing eligible right now all
/// yield an empty list.
pub fn generate_suggestions<'u, R: Rng + ?Sized>(
    user: Option<&'u User>,
    time: TimeOfDay,
    count: usize,
    rng: &mut R,
) -> Vec<ActivitySuggestion<'u>> {
    let Some(user) = user else {
        return Vec::new();
    };
    if user.meaningful_activities.is_empty() {
        return Vec::new();
    }

    let eligible = eligible_activities(&user.meaningful_activities, time);
    if eligible.is_empty() {
        tracing::debug!(%time, "no meaningful activity fits the current time");
        return Vec::new();
    }

    let selected = select_random(&eligible, count, &mut *rng);
    tracing::debug!(
        %time,
        eligible = eligible.len(),
        selected = selected.len(),
        "generated suggestions"
    );

    selected
        .into_iter()
        .map(|activity| ActivitySuggestion {
            activity,
            reason: reason_for(activity, user, time, &mut *rng),
        })
        .collect()
}

/// Owns the random source and the configured suggestion count.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rng: Mcg128Xsl64,
    count: usize,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SuggestionEngine {
    /// Engine with a reproducible random sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
            count: DEFAULT_SUGGESTION_COUNT,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
            count: DEFAULT_SUGGESTION_COUNT,
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn generate<'u>(
        &mut self,
        user: Option<&'u User>,
        time: TimeOfDay,
    ) -> Vec<ActivitySuggestion<'u>> {
        generate_suggestions(user, time, self.count, &mut self.rng)
    }
}
