//! The persisted completion record: which meals are marked done on which day.
//!
//! Absence of a day or meal slot is equivalent to "not done". Updates are
//! structural: the single mutator returns a new map and leaves the input
//! untouched, so observers can compare snapshots for change detection.
//!
//! The wire layout is fixed across versions: a JSON object keyed by
//! `"day" + N` strings, each holding an object keyed by the camelCase meal
//! slot names with boolean values.

use crate::types::{Day, MealKey};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Day -> meal slot -> done flag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionMap {
    days: BTreeMap<Day, BTreeMap<MealKey, bool>>,
}

impl CompletionMap {
    /// Whether a meal is marked done; absent entries read as false
    pub fn get(&self, day: Day, meal: MealKey) -> bool {
        self.days
            .get(&day)
            .and_then(|meals| meals.get(&meal))
            .copied()
            .unwrap_or(false)
    }

    /// The only mutator: returns a new map with `day`/`meal` set to `done`
    ///
    /// All other entries are unchanged. Idempotent with respect to computed
    /// results: setting the same flag twice yields an equal map.
    #[must_use]
    pub fn set_meal(&self, day: Day, meal: MealKey, done: bool) -> CompletionMap {
        let mut next = self.clone();
        next.days.entry(day).or_default().insert(meal, done);
        next
    }

    /// Whether any day has any recorded flag
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for CompletionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keyed: BTreeMap<String, &BTreeMap<MealKey, bool>> = self
            .days
            .iter()
            .map(|(day, meals)| (format!("day{}", day), meals))
            .collect();
        keyed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompletionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keyed: BTreeMap<String, BTreeMap<MealKey, bool>> =
            BTreeMap::deserialize(deserializer)?;

        let mut days = BTreeMap::new();
        for (key, meals) in keyed {
            let day: Day = key
                .strip_prefix("day")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| D::Error::custom(format!("invalid day key: {:?}", key)))?;
            days.insert(day, meals);
        }
        Ok(CompletionMap { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_entries_read_as_false() {
        let map = CompletionMap::default();
        assert!(!map.get(1, MealKey::Breakfast));
        assert!(!map.get(30, MealKey::Bedtime));
    }

    #[test]
    fn test_set_meal_is_structural() {
        let original = CompletionMap::default();
        let updated = original.set_meal(3, MealKey::Lunch, true);

        assert!(updated.get(3, MealKey::Lunch));
        assert!(!original.get(3, MealKey::Lunch));
        assert!(original.is_empty());
    }

    #[test]
    fn test_set_meal_leaves_other_entries_unchanged() {
        let map = CompletionMap::default()
            .set_meal(1, MealKey::Breakfast, true)
            .set_meal(1, MealKey::Dinner, true)
            .set_meal(2, MealKey::Lunch, true);

        let updated = map.set_meal(1, MealKey::Dinner, false);
        assert!(updated.get(1, MealKey::Breakfast));
        assert!(!updated.get(1, MealKey::Dinner));
        assert!(updated.get(2, MealKey::Lunch));
    }

    #[test]
    fn test_set_meal_is_idempotent() {
        let once = CompletionMap::default().set_meal(5, MealKey::PreWorkout, true);
        let twice = once.set_meal(5, MealKey::PreWorkout, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_wire_layout() {
        let map = CompletionMap::default()
            .set_meal(1, MealKey::Breakfast, true)
            .set_meal(12, MealKey::MidMorningSnack, false);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["day1"]["breakfast"], true);
        assert_eq!(json["day12"]["midMorningSnack"], false);
    }

    #[test]
    fn test_serde_round_trip() {
        let map = CompletionMap::default()
            .set_meal(1, MealKey::Breakfast, true)
            .set_meal(7, MealKey::Bedtime, true)
            .set_meal(30, MealKey::Dinner, false);

        let json = serde_json::to_string(&map).unwrap();
        let back: CompletionMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    fn test_invalid_day_key_is_rejected() {
        let result: Result<CompletionMap, _> =
            serde_json::from_str(r#"{"week1": {"breakfast": true}}"#);
        assert!(result.is_err());
    }
}
