//! Day navigation rules.
//!
//! Forward motion is gated: a day must be fully accomplished before the next
//! one unlocks. Backward motion is always permitted. Rejected transitions
//! are silent no-ops, not errors. The asymmetry between `advance` and
//! `retreat` is intentional and must not be "fixed" without product
//! confirmation.

use crate::progress::is_fully_accomplished;
use crate::types::{Day, MealKey};
use crate::CompletionMap;

/// The highest selectable day: one past the accomplished count, capped at
/// the cycle length
pub fn unlocked_up_to(accomplished: u32, total_days: Day) -> Day {
    (accomplished + 1).min(total_days)
}

/// Whether `day` may be selected given the accomplished count
pub fn can_select_day(day: Day, accomplished: u32, total_days: Day) -> bool {
    day <= unlocked_up_to(accomplished, total_days)
}

/// Move forward one day if the current day is fully accomplished
///
/// Gate first, wrap second: an accomplished final day advances to day 1. An
/// unaccomplished current day leaves the position unchanged.
pub fn advance<F>(current: Day, map: &CompletionMap, total_days: Day, meal_keys: F) -> Day
where
    F: Fn(Day) -> Vec<MealKey>,
{
    if !is_fully_accomplished(map, current, &meal_keys(current)) {
        return current;
    }
    if current + 1 > total_days {
        1
    } else {
        current + 1
    }
}

/// Move back one day, wrapping from day 1 to the final day
///
/// Always permitted regardless of completion state.
pub fn retreat(current: Day, total_days: Day) -> Day {
    if current <= 1 {
        total_days
    } else {
        current - 1
    }
}

/// Jump to `requested` if it is unlocked, otherwise stay on `current`
pub fn select_day(current: Day, requested: Day, accomplished: u32, total_days: Day) -> Day {
    if can_select_day(requested, accomplished, total_days) {
        requested
    } else {
        current
    }
}
