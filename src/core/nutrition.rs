use crate::models::{Gender, NutritionTargets, PrimaryGoal, UserProfile};

/// Age assumed by the BMR formula (not collected from users)
pub const ASSUMED_AGE: f64 = 25.0;

/// "Moderately active" multiplier applied to BMR
pub const ACTIVITY_MULTIPLIER: f64 = 1.55;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Protein and fat allocation for a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    /// Grams of protein per kg of bodyweight
    pub protein_per_kg: f64,
    /// Share of daily calories coming from fat
    pub fat_ratio: f64,
}

impl MacroSplit {
    pub fn for_goal(goal: &PrimaryGoal) -> Self {
        match goal {
            PrimaryGoal::MuscleGain => Self { protein_per_kg: 2.2, fat_ratio: 0.25 },
            PrimaryGoal::FatLoss => Self { protein_per_kg: 2.2, fat_ratio: 0.30 },
            PrimaryGoal::GeneralFitness | PrimaryGoal::Other(_) => {
                Self { protein_per_kg: 1.6, fat_ratio: 0.25 }
            }
        }
    }
}

/// Basal metabolic rate (Mifflin-St Jeor) at the assumed age
///
/// Only `Female` uses the female constant; `Male` and `Other` share +5.
#[inline]
pub fn basal_metabolic_rate(gender: Gender, height_cm: f64, weight_kg: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * ASSUMED_AGE;
    match gender {
        Gender::Female => base - 161.0,
        Gender::Male | Gender::Other => base + 5.0,
    }
}

/// Compute daily calorie and macro targets
///
/// Pure and deterministic: the same inputs always give the same targets.
/// Carbs fill whatever calories protein and fat leave over, and are clamped
/// to zero when protein and fat already exceed the total. Degenerate inputs
/// (tiny or negative weights) produce degenerate but non-negative targets.
pub fn calculate_targets(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    goal: &PrimaryGoal,
) -> NutritionTargets {
    let bmr = basal_metabolic_rate(gender, height_cm, weight_kg);
    let daily_calories = bmr * ACTIVITY_MULTIPLIER;

    let split = MacroSplit::for_goal(goal);
    let protein = weight_kg * split.protein_per_kg;
    let fat = daily_calories * split.fat_ratio / KCAL_PER_GRAM_FAT;
    let carbs = (daily_calories - (protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT))
        / KCAL_PER_GRAM_CARB;

    NutritionTargets {
        daily_calories: round_non_negative(daily_calories),
        protein_grams: round_non_negative(protein),
        carb_grams: round_non_negative(carbs),
        fat_grams: round_non_negative(fat),
    }
}

/// Convenience wrapper taking a sanitized profile
pub fn targets_for_profile(profile: &UserProfile) -> NutritionTargets {
    calculate_targets(
        profile.gender,
        profile.height_cm,
        profile.weight_kg,
        &profile.primary_goal,
    )
}

#[inline]
fn round_non_negative(value: f64) -> u32 {
    // `as` saturates, so huge values cap at u32::MAX and NaN becomes 0
    value.round().max(0.0) as u32
}
