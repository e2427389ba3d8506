//! Eligibility filtering and random sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Activity, TimeOfDay};

/// Activities that fit `time`, either directly or through `anytime`.
///
/// Order-preserving; no deduplication.
pub fn eligible_activities(activities: &[Activity], time: TimeOfDay) -> Vec<&Activity> {
    activities.iter().filter(|a| a.fits(time)).collect()
}

/// Sample up to `count` items without replacement, in random order.
///
/// Returns `min(count, items.len())` distinct elements; when `count` covers
/// the whole input the result is a shuffle of it.
pub fn select_random<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = items.to_vec();
    let amount = count.min(pool.len());
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}
