//! The built-in 30-day diet and exercise plan.
//!
//! Plan generation is pure and deterministic: the content for a day depends
//! only on the day number, through small modular-arithmetic rules (which
//! dish a meal uses, whether the day is a rest day). The full cycle is built
//! once and cached.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Cached full plan - built once and reused across all operations
static FULL_PLAN: Lazy<Vec<DayPlan>> =
    Lazy::new(|| (1..=TOTAL_DAYS).map(generate_plan).collect());

/// Get the cached plan for every day of the cycle
pub fn full_plan() -> &'static [DayPlan] {
    &FULL_PLAN
}

/// Get the cached plan for a single day
///
/// `day` must be within 1..=TOTAL_DAYS; the caller controls the range.
pub fn plan_for(day: Day) -> &'static DayPlan {
    debug_assert!((1..=TOTAL_DAYS).contains(&day));
    &FULL_PLAN[(day - 1) as usize]
}

/// Meal slots present in a day's generated diet, in day order
pub fn meal_keys_for(day: Day) -> Vec<MealKey> {
    plan_for(day).meal_keys()
}

/// Generate the plan for one day from scratch
///
/// Pure and total for `day` in 1..=TOTAL_DAYS. Two calls with the same day
/// produce structurally identical output. Prefer [`plan_for`] in production
/// paths; this function is retained for testing and direct use.
pub fn generate_plan(day: Day) -> DayPlan {
    debug_assert!((1..=TOTAL_DAYS).contains(&day));

    let mut diet = BTreeMap::new();
    diet.insert(MealKey::Breakfast, breakfast(day));
    diet.insert(MealKey::MidMorningSnack, mid_morning_snack());
    diet.insert(MealKey::Lunch, lunch(day));
    diet.insert(MealKey::PreWorkout, pre_workout());
    diet.insert(MealKey::PostWorkout, post_workout());
    diet.insert(MealKey::Dinner, dinner(day));
    diet.insert(MealKey::Bedtime, bedtime());

    DayPlan {
        day,
        diet,
        exercise: exercise(day),
    }
}

fn subtitle(text: &str) -> PlanItem {
    PlanItem::Subtitle(text.into())
}

fn entry(text: &str) -> PlanItem {
    PlanItem::Entry(text.into())
}

// ============================================================================
// Meals
// ============================================================================

fn breakfast(day: Day) -> MealDetail {
    let dish = if day % 3 == 0 {
        "Sprouted Moong Dal Salad"
    } else if day % 2 == 0 {
        "Besan Cheela"
    } else {
        "Spicy Egg Bhurji"
    };

    MealDetail {
        dish: dish.into(),
        what_to_make: vec![
            subtitle("Spicy Egg Bhurji:"),
            entry("3-4 egg whites + 1 whole egg"),
            entry("1/2 small onion, 1/2 tomato, 1 green chili"),
            entry("Small piece ginger, fresh coriander"),
            entry("Spices (turmeric, red chili, salt)"),
            subtitle("Besan Cheela:"),
            entry("1/2 cup besan (gram flour)"),
            entry("1/4 cup finely chopped mixed veggies (onion, bell pepper, spinach)"),
            entry("1 green chili, small piece ginger, fresh coriander"),
            entry("Spices (turmeric, red chili, ajwain, salt)"),
            subtitle("Sprouted Moong Dal Salad:"),
            entry("1 cup sprouted moong dal"),
            entry("1/2 cucumber, 1/2 tomato, 1/4 onion"),
            entry("1 green chili, fresh coriander"),
            entry("Lemon juice, chaat masala, black salt"),
        ],
        how_to_make: vec![
            subtitle("Spicy Egg Bhurji:"),
            entry("Heat 1 tsp oil in a non-stick pan. Saute finely chopped onion until translucent."),
            entry("Add ginger-garlic paste (or grated), green chili, and chopped tomato. Cook until soft."),
            entry("Add turmeric, red chili powder, and salt. Whisk eggs and egg whites, pour into pan. Scramble until cooked."),
            entry("Garnish with fresh coriander."),
            subtitle("Besan Cheela:"),
            entry("In a bowl, mix besan with water to form a smooth, thin batter (like pancake batter)."),
            entry("Add all chopped veggies, ginger, green chili, coriander, and spices."),
            entry("Heat a non-stick tawa, lightly grease with a few drops of oil."),
            entry("Pour a ladleful of batter and spread into a thin circle. Cook on medium heat until golden brown on both sides."),
            subtitle("Sprouted Moong Dal Salad:"),
            entry("In a bowl, combine sprouted moong dal with all chopped vegetables, green chili, and coriander."),
            entry("Add lemon juice, chaat masala, and black salt. Toss well and serve fresh."),
        ],
        shop_list: vec![
            entry("For Egg Bhurji: Eggs, Onion, Tomato, Green Chili, Ginger, Coriander."),
            entry("For Besan Cheela: Besan (Gram Flour), Onion, Bell Pepper, Spinach, Green Chili, Ginger, Coriander."),
            entry("For Sprouted Moong Dal Salad: Whole Moong (to sprout at home or buy pre-sprouted), Cucumber, Tomato, Onion, Green Chili, Coriander, Lemon."),
        ],
    }
}

fn mid_morning_snack() -> MealDetail {
    MealDetail {
        dish: "Plain Greek Yogurt with Cumin/Chili".into(),
        what_to_make: vec![
            entry("1 cup plain Greek yogurt"),
            entry("1/4 tsp roasted cumin powder"),
            entry("Pinch of black salt"),
            entry("Pinch of red chili powder"),
        ],
        how_to_make: vec![entry("Mix all ingredients in a bowl."), entry("Enjoy.")],
        shop_list: vec![
            entry("Plain Greek Yogurt"),
            entry("Cumin Powder"),
            entry("Red Chili Powder"),
            entry("Black Salt"),
        ],
    }
}

fn lunch(day: Day) -> MealDetail {
    let dish = if day % 2 == 0 {
        "Spicy Mixed Vegetable Sabzi with 1 Whole Wheat Roti"
    } else {
        "Masoor Dal (Red Lentil) with Brown Rice"
    };

    MealDetail {
        dish: dish.into(),
        what_to_make: vec![
            subtitle("Spicy Mixed Vegetable Sabzi:"),
            entry("1 cup mixed non-starchy vegetables (broccoli, bell peppers, beans, spinach)"),
            entry("1/2 onion, 1/2 tomato, 1 green chili"),
            entry("Ginger-garlic paste, spices (turmeric, red chili, coriander, cumin, garam masala)"),
            entry("1-2 thin whole wheat rotis"),
            subtitle("Masoor Dal with Brown Rice:"),
            entry("1/2 cup masoor dal"),
            entry("1/2 onion, 1/2 tomato, 1 green chili"),
            entry("Ginger-garlic paste, spices (turmeric, red chili, coriander)"),
            entry("Tempering ingredients (mustard seeds, cumin seeds, curry leaves, hing)"),
            entry("1/2 cup cooked brown rice"),
        ],
        how_to_make: vec![
            subtitle("Spicy Mixed Vegetable Sabzi:"),
            entry("Heat 1 tsp oil in a non-stick pan. Saute onion until translucent."),
            entry("Add ginger-garlic paste, green chili, and tomato. Cook until soft."),
            entry("Add all spices and cook for 1-2 minutes."),
            entry("Add chopped mixed vegetables and a splash of water. Cover and cook until veggies are tender-crisp."),
            entry("Serve with a thin whole wheat roti (made without oil/ghee)."),
            subtitle("Masoor Dal with Brown Rice:"),
            entry("Wash masoor dal. In a pressure cooker or pot, combine dal with 2-3 cups water, chopped onion, tomato, green chili, ginger-garlic paste, turmeric, red chili, and coriander powder."),
            entry("Cook until dal is soft."),
            entry("For tempering, heat 1 tsp oil in a small pan. Add mustard seeds, cumin seeds, curry leaves, and hing. Once spluttering, pour over the dal."),
            entry("Serve with measured brown rice."),
        ],
        shop_list: vec![
            entry("For Sabzi: Mixed Vegetables (Broccoli, Bell Peppers, Beans, Spinach), Onion, Tomato, Green Chili, Ginger, Garlic, Whole Wheat Flour."),
            entry("For Masoor Dal: Masoor Dal (Red Lentil), Onion, Tomato, Green Chili, Ginger, Garlic, Mustard Seeds, Cumin Seeds, Curry Leaves, Hing, Brown Rice."),
        ],
    }
}

fn pre_workout() -> MealDetail {
    MealDetail {
        dish: "Small Apple".into(),
        what_to_make: vec![entry("1 small apple.")],
        how_to_make: vec![entry("Eat it.")],
        shop_list: vec![entry("Apples.")],
    }
}

fn post_workout() -> MealDetail {
    MealDetail {
        dish: "Protein Shake (Water-based)".into(),
        what_to_make: vec![entry("1 scoop protein powder"), entry("200-250ml water")],
        how_to_make: vec![
            entry("Mix protein powder with water in a shaker bottle until smooth."),
            entry("Drink immediately after workout."),
        ],
        shop_list: vec![entry("Protein Powder (Whey or Plant-based).")],
    }
}

fn dinner(day: Day) -> MealDetail {
    let dish = if day % 2 == 0 {
        "Spicy Paneer Bhurji with Steamed Spinach"
    } else {
        "Chana Dal (Split Bengal Gram) with Cucumber Salad"
    };

    MealDetail {
        dish: dish.into(),
        what_to_make: vec![
            subtitle("Spicy Paneer Bhurji:"),
            entry("150-200g low-fat paneer (crumbled)"),
            entry("1/2 onion, 1/2 tomato, 1 green chili"),
            entry("Ginger-garlic paste, spices (turmeric, red chili, coriander, garam masala)"),
            entry("1 cup steamed spinach"),
            subtitle("Chana Dal with Cucumber Salad:"),
            entry("1/2 cup chana dal"),
            entry("1/2 onion, 1/2 tomato, 1 green chili"),
            entry("Ginger-garlic paste, spices (turmeric, red chili, coriander)"),
            entry("Tempering ingredients (mustard seeds, cumin seeds, curry leaves, hing)"),
            entry("1 large cucumber, lemon, black salt, red chili powder"),
        ],
        how_to_make: vec![
            subtitle("Spicy Paneer Bhurji:"),
            entry("Heat 1 tsp oil in a non-stick pan. Saute finely chopped onion until translucent."),
            entry("Add ginger-garlic paste, green chili, and tomato. Cook until soft."),
            entry("Add all spices and cook for 1-2 minutes."),
            entry("Add crumbled paneer and cook for 5-7 minutes, stirring occasionally."),
            entry("Serve with steamed spinach."),
            subtitle("Chana Dal with Cucumber Salad:"),
            entry("Wash chana dal. In a pressure cooker or pot, combine dal with 2-3 cups water, chopped onion, tomato, green chili, ginger-garlic paste, turmeric, red chili, and coriander powder."),
            entry("Cook until dal is soft."),
            entry("For tempering, heat 1 tsp oil in a small pan. Add mustard seeds, cumin seeds, curry leaves, and hing. Once spluttering, pour over the dal."),
            entry("For salad, chop cucumber, add lemon juice, black salt, and red chili powder."),
        ],
        shop_list: vec![
            entry("For Paneer Bhurji: Low-fat Paneer, Onion, Tomato, Green Chili, Ginger, Garlic, Spinach."),
            entry("For Chana Dal: Chana Dal, Onion, Tomato, Green Chili, Ginger, Garlic, Mustard Seeds, Cumin Seeds, Curry Leaves, Hing, Cucumber, Lemon."),
        ],
    }
}

fn bedtime() -> MealDetail {
    MealDetail {
        dish: "Small Bowl of Plain Greek Yogurt or 3-4 Egg Whites".into(),
        what_to_make: vec![entry("1/2 cup plain Greek yogurt OR 3-4 egg whites.")],
        how_to_make: vec![entry(
            "Eat plain Greek yogurt OR scramble egg whites (without oil, just a pinch of salt).",
        )],
        shop_list: vec![entry("Plain Greek Yogurt OR Eggs.")],
    }
}

// ============================================================================
// Exercise
// ============================================================================

fn exercise(day: Day) -> ExerciseDetail {
    let is_rest_day = day % 3 == 0 || day % 6 == 0;

    if is_rest_day {
        ExerciseDetail {
            focus: if day % 7 == 0 {
                "Complete Rest Day".into()
            } else {
                "Active Recovery & Core".into()
            },
            warm_up: "5-10 minutes light cardio (spot jogging, arm circles)".into(),
            workout: vec![
                "Light Walk/Stretch: 20-30 minutes brisk walking or gentle stretching.".into(),
                "Plank: 3 sets, hold for 30-60 seconds.".into(),
                "Side Plank: 3 sets, hold for 20-40 seconds per side.".into(),
                "Crunches: 3 sets of 15-20 reps.".into(),
                "Leg Raises: 3 sets of 15-20 reps.".into(),
                "Bird-Dog: 3 sets of 10-12 reps per side.".into(),
            ],
            cool_down: "5-10 minutes static stretches (holding each stretch for 20-30 seconds)."
                .into(),
        }
    } else {
        ExerciseDetail {
            focus: "Full Body & Bicep Focus".into(),
            warm_up: "5-10 minutes light cardio (spot jogging, jumping jacks), dynamic stretches (arm circles, leg swings, torso twists).".into(),
            workout: vec![
                "Dumbbell Bicep Curls (Single Arm): 3-4 sets of 8-12 reps per arm (slow eccentric).".into(),
                "Hammer Curls (Single Arm): 3-4 sets of 8-12 reps per arm.".into(),
                "Concentration Curls: 3-4 sets of 10-15 reps per arm.".into(),
                "Reverse Curls: 2-3 sets of 10-15 reps per arm.".into(),
                "Goblet Squat: 3-4 sets of 10-15 reps.".into(),
                "Single Arm Dumbbell Row: 3-4 sets of 8-12 reps per arm.".into(),
                "Dumbbell Floor Press (Single Arm): 3-4 sets of 10-15 reps per arm.".into(),
                "Overhead Dumbbell Extension (Triceps): 3-4 sets of 10-15 reps.".into(),
                "Lunges (Single Arm Dumbbell): 3 sets of 10-12 reps per leg.".into(),
                "Glute Bridges (with Dumbbell on Hips): 3-4 sets of 15-20 reps.".into(),
                "Dumbbell Swings (Single Arm - careful with form): 3 sets of 15-20 reps per arm.".into(),
                "Chewing: Chew sugar-free gum frequently.".into(),
                "Chin Lifts: Look up, push lower jaw out, lower lip over upper. Hold 10s, 10-15 reps.".into(),
                "Good Posture: Maintain throughout the day.".into(),
            ],
            cool_down: "5-10 minutes static stretches, holding each for 20-30 seconds.".into(),
        }
    }
}

// ============================================================================
// Fixed Reference Lists
// ============================================================================

/// The 30-day master shopping list, grouped by category
pub fn master_shopping_list() -> &'static [&'static str] {
    &[
        "Fresh Vegetables: Spinach, Broccoli, Bell Peppers (various colors), Tomatoes, Onions, Green Chilies, Ginger, Garlic, Cucumber, Carrots, Radish, Cauliflower, Beans, Cabbage, Zucchini, Lauki (bottle gourd)",
        "Lean Protein: Eggs, Low-fat Paneer, Greek Yogurt (plain)",
        "Lentils & Beans: Moong Dal (split green gram), Masoor Dal (red lentil), Chana Dal (split Bengal gram), Whole Moong (green gram), Chickpeas (Chole), Kidney Beans (Rajma)",
        "Grains: Brown Rice, Quinoa, Whole Wheat Flour (Atta), Bajra Flour, Jowar Flour",
        "Healthy Fats: Olive Oil, Mustard Oil (small bottle), Almonds, Walnuts, Chia Seeds, Flax Seeds, Avocado",
        "Spices: Turmeric Powder, Red Chili Powder, Coriander Powder, Cumin Powder, Garam Masala, Chaat Masala, Black Salt, Asafoetida (Hing), Mustard Seeds, Cumin Seeds, Fenugreek Seeds, Curry Leaves, Ajwain",
        "Other: Lemon/Lime, Sugar-free Gum, Unsweetened Almond Milk (optional)",
    ]
}

/// Fixed advisory notes shown alongside the plan
pub fn important_notes() -> &'static [&'static str] {
    &[
        "Portion Control: Even with healthy Indian dishes, portion control is crucial for fat loss. Stick to the suggested quantities.",
        "Cooking Oil: Use minimal oil (1-2 tsp per dish for cooking/tempering). Prefer olive oil or mustard oil.",
        "No Added Sugar: Absolutely no added sugar in any form.",
        "Hydration: Drink 3-4 liters of water daily. Green tea is also recommended.",
        "Sleep & Recovery: Aim for 7-9 hours of quality sleep. It's vital for muscle repair and fat loss.",
        "Listen to Your Body: If you feel excessive fatigue or pain, take an extra rest day or modify your workout.",
        "Consistency is Key: Adherence to both diet and exercise is paramount for results in 30 days.",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_plan_is_deterministic() {
        for day in 1..=TOTAL_DAYS {
            let a = generate_plan(day);
            let b = generate_plan(day);
            assert_eq!(a.meal_keys(), b.meal_keys());
            for key in a.meal_keys() {
                assert_eq!(a.diet[&key].dish, b.diet[&key].dish);
            }
            assert_eq!(a.exercise.focus, b.exercise.focus);
        }
    }

    #[test]
    fn test_every_day_has_seven_meal_slots() {
        for day in 1..=TOTAL_DAYS {
            let keys = meal_keys_for(day);
            assert_eq!(keys.len(), 7, "day {} has wrong key count", day);
            assert_eq!(keys, MealKey::ALL.to_vec());
        }
    }

    #[test]
    fn test_rest_day_rule() {
        // Multiples of 3 are rest days; day 7 is not, despite being a week
        // boundary.
        assert_eq!(plan_for(3).exercise.focus, "Active Recovery & Core");
        assert_eq!(plan_for(6).exercise.focus, "Active Recovery & Core");
        assert_eq!(plan_for(7).exercise.focus, "Full Body & Bicep Focus");
        assert_eq!(plan_for(1).exercise.focus, "Full Body & Bicep Focus");
        // Day 21 is both a rest day and a multiple of 7.
        assert_eq!(plan_for(21).exercise.focus, "Complete Rest Day");
    }

    #[test]
    fn test_breakfast_dish_rotation() {
        assert_eq!(plan_for(1).diet[&MealKey::Breakfast].dish, "Spicy Egg Bhurji");
        assert_eq!(plan_for(2).diet[&MealKey::Breakfast].dish, "Besan Cheela");
        // day % 3 wins over day % 2
        assert_eq!(
            plan_for(6).diet[&MealKey::Breakfast].dish,
            "Sprouted Moong Dal Salad"
        );
    }

    #[test]
    fn test_lunch_and_dinner_alternate() {
        assert!(plan_for(1).diet[&MealKey::Lunch].dish.contains("Masoor Dal"));
        assert!(plan_for(2).diet[&MealKey::Lunch].dish.contains("Sabzi"));
        assert!(plan_for(1).diet[&MealKey::Dinner].dish.contains("Chana Dal"));
        assert!(plan_for(2).diet[&MealKey::Dinner].dish.contains("Paneer"));
    }

    #[test]
    fn test_cached_plan_matches_generated() {
        assert_eq!(full_plan().len(), TOTAL_DAYS as usize);
        for day in 1..=TOTAL_DAYS {
            assert_eq!(plan_for(day).day, day);
            assert_eq!(plan_for(day).meal_keys(), generate_plan(day).meal_keys());
        }
    }

    #[test]
    fn test_checklists_have_checkable_entries() {
        let plan = plan_for(1);
        for (_, meal) in &plan.diet {
            assert!(meal.what_to_make.iter().any(|i| i.is_checkable()));
            assert!(meal.how_to_make.iter().any(|i| i.is_checkable()));
            assert!(meal.shop_list.iter().any(|i| i.is_checkable()));
        }
    }

    #[test]
    fn test_reference_lists_present() {
        assert_eq!(master_shopping_list().len(), 7);
        assert_eq!(important_notes().len(), 7);
    }
}
