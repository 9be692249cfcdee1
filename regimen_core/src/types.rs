//! Core domain types for the regimen tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Days and the fixed plan cycle length
//! - Meal slots and their checklists
//! - Generated plan content (meals, exercise)
//! - Session-local UI state (tab, checklist)
//! - Derived progress values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Days
// ============================================================================

/// Index of a day within the fixed plan cycle, 1..=TOTAL_DAYS
pub type Day = u32;

/// Length of the plan cycle
pub const TOTAL_DAYS: Day = 30;

// ============================================================================
// Meal Slots
// ============================================================================

/// The seven fixed meal slots within a day
///
/// Declaration order is day order, and the derived `Ord` follows it, so
/// ordered maps keyed by `MealKey` iterate breakfast-to-bedtime. The
/// camelCase wire names must stay stable because they appear in the
/// persisted completion file.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MealKey {
    Breakfast,
    MidMorningSnack,
    Lunch,
    PreWorkout,
    PostWorkout,
    Dinner,
    Bedtime,
}

impl MealKey {
    /// All meal slots in day order
    pub const ALL: [MealKey; 7] = [
        MealKey::Breakfast,
        MealKey::MidMorningSnack,
        MealKey::Lunch,
        MealKey::PreWorkout,
        MealKey::PostWorkout,
        MealKey::Dinner,
        MealKey::Bedtime,
    ];

    /// Stable wire name, as stored in the completion file
    pub fn wire_name(&self) -> &'static str {
        match self {
            MealKey::Breakfast => "breakfast",
            MealKey::MidMorningSnack => "midMorningSnack",
            MealKey::Lunch => "lunch",
            MealKey::PreWorkout => "preWorkout",
            MealKey::PostWorkout => "postWorkout",
            MealKey::Dinner => "dinner",
            MealKey::Bedtime => "bedtime",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            MealKey::Breakfast => "Breakfast",
            MealKey::MidMorningSnack => "Mid-Morning Snack",
            MealKey::Lunch => "Lunch",
            MealKey::PreWorkout => "Pre-Workout",
            MealKey::PostWorkout => "Post-Workout",
            MealKey::Dinner => "Dinner",
            MealKey::Bedtime => "Bedtime",
        }
    }
}

impl fmt::Display for MealKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealKey {
    type Err = String;

    /// Forgiving parse for CLI input: case-insensitive, separators ignored,
    /// so `breakfast`, `mid-morning-snack` and `midMorningSnack` all work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "breakfast" => Ok(MealKey::Breakfast),
            "midmorningsnack" | "snack" => Ok(MealKey::MidMorningSnack),
            "lunch" => Ok(MealKey::Lunch),
            "preworkout" => Ok(MealKey::PreWorkout),
            "postworkout" => Ok(MealKey::PostWorkout),
            "dinner" => Ok(MealKey::Dinner),
            "bedtime" => Ok(MealKey::Bedtime),
            _ => Err(format!("unknown meal slot: {}", s)),
        }
    }
}

/// The three checkable lists attached to every meal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    WhatToMake,
    HowToMake,
    ShopList,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::WhatToMake => "What to Make",
            ListKind::HowToMake => "How to Make",
            ListKind::ShopList => "What to Order from Shop",
        }
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "whattomake" | "make" | "ingredients" => Ok(ListKind::WhatToMake),
            "howtomake" | "how" | "steps" => Ok(ListKind::HowToMake),
            "shoplist" | "shop" => Ok(ListKind::ShopList),
            _ => Err(format!("unknown list: {}", s)),
        }
    }
}

// ============================================================================
// Plan Content Types
// ============================================================================

/// One line of a meal checklist
///
/// Subtitles are display-only headings between recipe variants; entries are
/// the checkable lines.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanItem {
    Subtitle(String),
    Entry(String),
}

impl PlanItem {
    /// The line text regardless of kind
    pub fn text(&self) -> &str {
        match self {
            PlanItem::Subtitle(t) | PlanItem::Entry(t) => t,
        }
    }

    /// Whether this line can be checked off
    pub fn is_checkable(&self) -> bool {
        matches!(self, PlanItem::Entry(_))
    }
}

/// Full detail for one meal slot on one day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MealDetail {
    pub dish: String,
    pub what_to_make: Vec<PlanItem>,
    pub how_to_make: Vec<PlanItem>,
    pub shop_list: Vec<PlanItem>,
}

impl MealDetail {
    /// The checklist of the given kind
    pub fn list(&self, kind: ListKind) -> &[PlanItem] {
        match kind {
            ListKind::WhatToMake => &self.what_to_make,
            ListKind::HowToMake => &self.how_to_make,
            ListKind::ShopList => &self.shop_list,
        }
    }
}

/// Exercise prescription for one day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseDetail {
    pub focus: String,
    pub warm_up: String,
    pub workout: Vec<String>,
    pub cool_down: String,
}

/// The complete generated plan for one day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: Day,
    pub diet: BTreeMap<MealKey, MealDetail>,
    pub exercise: ExerciseDetail,
}

impl DayPlan {
    /// Meal slots present in this day's diet, in day order
    ///
    /// The key set is always read from the generated plan for the day, never
    /// assumed to be global across days.
    pub fn meal_keys(&self) -> Vec<MealKey> {
        self.diet.keys().copied().collect()
    }
}

// ============================================================================
// Session-Local UI State
// ============================================================================

/// The two content views
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Diet,
    Exercise,
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diet" => Ok(Tab::Diet),
            "exercise" | "workout" => Ok(Tab::Exercise),
            _ => Err(format!("unknown tab: {}", s)),
        }
    }
}

/// Per-meal checklist scratch state
///
/// Never persisted; owned by the session and dropped whenever the current
/// day changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistState {
    checked: HashMap<MealKey, HashMap<ListKind, HashMap<usize, bool>>>,
}

impl ChecklistState {
    /// Whether a checklist line is checked (absent == unchecked)
    pub fn is_checked(&self, meal: MealKey, list: ListKind, index: usize) -> bool {
        self.checked
            .get(&meal)
            .and_then(|lists| lists.get(&list))
            .and_then(|items| items.get(&index))
            .copied()
            .unwrap_or(false)
    }

    /// Flip a checklist line
    pub fn toggle(&mut self, meal: MealKey, list: ListKind, index: usize) {
        let entry = self
            .checked
            .entry(meal)
            .or_default()
            .entry(list)
            .or_default()
            .entry(index)
            .or_insert(false);
        *entry = !*entry;
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

// ============================================================================
// Derived Progress
// ============================================================================

/// Values derived from the completion map; recomputed on every change
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of fully accomplished days in the cycle
    pub accomplished: u32,
    /// Longest run of consecutive fully accomplished days anywhere in the
    /// 1..=TOTAL_DAYS sequence
    pub streak: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_key_wire_names_are_stable() {
        let names: Vec<_> = MealKey::ALL.iter().map(|k| k.wire_name()).collect();
        assert_eq!(
            names,
            vec![
                "breakfast",
                "midMorningSnack",
                "lunch",
                "preWorkout",
                "postWorkout",
                "dinner",
                "bedtime"
            ]
        );
    }

    #[test]
    fn test_meal_key_serde_matches_wire_name() {
        for key in MealKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.wire_name()));
            let back: MealKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn test_meal_key_parse_is_forgiving() {
        assert_eq!("breakfast".parse::<MealKey>().unwrap(), MealKey::Breakfast);
        assert_eq!(
            "mid-morning-snack".parse::<MealKey>().unwrap(),
            MealKey::MidMorningSnack
        );
        assert_eq!(
            "midMorningSnack".parse::<MealKey>().unwrap(),
            MealKey::MidMorningSnack
        );
        assert_eq!("PRE_WORKOUT".parse::<MealKey>().unwrap(), MealKey::PreWorkout);
        assert!("elevenses".parse::<MealKey>().is_err());
    }

    #[test]
    fn test_meal_key_order_is_day_order() {
        let mut sorted = MealKey::ALL;
        sorted.sort();
        assert_eq!(sorted, MealKey::ALL);
    }

    #[test]
    fn test_checklist_toggle_and_reset() {
        let mut state = ChecklistState::default();
        assert!(!state.is_checked(MealKey::Lunch, ListKind::ShopList, 2));

        state.toggle(MealKey::Lunch, ListKind::ShopList, 2);
        assert!(state.is_checked(MealKey::Lunch, ListKind::ShopList, 2));

        state.toggle(MealKey::Lunch, ListKind::ShopList, 2);
        assert!(!state.is_checked(MealKey::Lunch, ListKind::ShopList, 2));

        state.toggle(MealKey::Dinner, ListKind::HowToMake, 0);
        state = ChecklistState::default();
        assert!(state.is_empty());
    }
}
