//! Progress derivation: accomplished days and streak.
//!
//! Both values are recomputed from scratch whenever the completion record
//! changes; the data set is fixed and tiny, so no caching is needed.

use crate::types::{Day, MealKey, Progress};
use crate::CompletionMap;

/// Whether every meal slot in `keys` is marked done for `day`
///
/// A map with no entry for the day reads as all-false, so any non-empty key
/// set yields false against an empty map.
pub fn is_fully_accomplished(map: &CompletionMap, day: Day, keys: &[MealKey]) -> bool {
    keys.iter().all(|&key| map.get(day, key))
}

/// Derive progress from the completion record
///
/// - `accomplished`: count of fully accomplished days in `1..=total_days`.
/// - `streak`: the longest run of consecutive fully accomplished days found
///   anywhere in the sequence. This is deliberately not the trailing streak
///   ending at the latest day.
///
/// The meal-slot set is looked up per day through `meal_keys`, never assumed
/// constant across days.
pub fn compute_progress<F>(map: &CompletionMap, total_days: Day, meal_keys: F) -> Progress
where
    F: Fn(Day) -> Vec<MealKey>,
{
    let mut accomplished = 0;
    let mut run = 0;
    let mut streak = 0;

    for day in 1..=total_days {
        if is_fully_accomplished(map, day, &meal_keys(day)) {
            accomplished += 1;
            run += 1;
            streak = streak.max(run);
        } else {
            run = 0;
        }
    }

    tracing::debug!(accomplished, streak, "Recomputed progress");
    Progress {
        accomplished,
        streak,
    }
}
