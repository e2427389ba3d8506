//! Natural-language reasons attached to suggestions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Activity, TimeOfDay, User};

/// Stand-in when the user has not listed any escape activities.
pub const ESCAPE_FALLBACK: &str = "unhelpful habits";

/// One sentence explaining why `activity` is being suggested.
///
/// The aspiration template only takes part when the user has aspirations.
pub fn reason_for<R: Rng + ?Sized>(
    activity: &Activity,
    user: &User,
    time: TimeOfDay,
    rng: &mut R,
) -> String {
    let mut reasons = Vec::with_capacity(5);

    if let Some(aspiration) = user.aspirations.choose(rng) {
        reasons.push(format!(
            "{} aligns with your aspiration to {}.",
            activity.name, aspiration
        ));
    }
    let escape = user
        .escape_activities
        .choose(rng)
        .map(|a| a.name.as_str())
        .unwrap_or(ESCAPE_FALLBACK);
    reasons.push(format!(
        "This is a perfect {time} activity to replace {escape}."
    ));
    reasons.push(format!(
        "You've mentioned that {} brings you genuine fulfillment.",
        activity.name
    ));
    reasons.push("This activity helps build the habits you really want.".to_string());
    reasons.push(format!("{} is a great use of your time right now.", activity.name));

    let index = rng.gen_range(0..reasons.len());
    reasons.swap_remove(index)
}
