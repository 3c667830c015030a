use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the BMR formula
///
/// Anything that isn't recognised as female uses the male constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "male" | "m" | "man" => Gender::Male,
            "female" | "f" | "woman" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Training goal selected by the user
///
/// Unknown goals keep their label for the prompt but get the general fitness
/// macro split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    MuscleGain,
    FatLoss,
    GeneralFitness,
    Other(String),
}

impl PrimaryGoal {
    pub fn parse(raw: &str) -> Self {
        let label = normalize_label(raw);
        match label.as_str() {
            "muscle gain" => PrimaryGoal::MuscleGain,
            "fat loss" => PrimaryGoal::FatLoss,
            "general fitness" => PrimaryGoal::GeneralFitness,
            _ => PrimaryGoal::Other(label),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PrimaryGoal::MuscleGain => "muscle gain",
            PrimaryGoal::FatLoss => "fat loss",
            PrimaryGoal::GeneralFitness => "general fitness",
            PrimaryGoal::Other(label) => label.as_str(),
        }
    }
}

/// Where the user trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Gym,
    Home,
}

impl Location {
    /// Only "gym" selects the gym; everything else trains at home
    pub fn parse(raw: &str) -> Self {
        if normalize_label(raw) == "gym" {
            Location::Gym
        } else {
            Location::Home
        }
    }
}

/// Sanitized, metric view of a plan request
///
/// Built once per request by [`crate::core::sanitize::sanitize_profile`] and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub gender: Gender,
    #[serde(rename = "heightCm")]
    pub height_cm: f64,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    #[serde(rename = "primaryGoal")]
    pub primary_goal: PrimaryGoal,
    #[serde(rename = "daysPerWeek")]
    pub days_per_week: i64,
    #[serde(rename = "hoursPerDay")]
    pub hours_per_day: f64,
    pub location: Location,
    #[serde(rename = "includeCardio")]
    pub include_cardio: bool,
    #[serde(rename = "targetMuscles")]
    pub target_muscles: Vec<String>,
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    #[serde(rename = "dailyCalories")]
    pub daily_calories: u32,
    #[serde(rename = "proteinGrams")]
    pub protein_grams: u32,
    #[serde(rename = "carbGrams")]
    pub carb_grams: u32,
    #[serde(rename = "fatGrams")]
    pub fat_grams: u32,
}

impl fmt::Display for NutritionTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Daily Calories: {} kcal", self.daily_calories)?;
        writeln!(f, "Protein: {} g", self.protein_grams)?;
        writeln!(f, "Carbohydrates: {} g", self.carb_grams)?;
        write!(f, "Fat: {} g", self.fat_grams)
    }
}

/// Lowercase, trim and treat `_`/`-` like spaces so "Muscle_Gain" == "muscle gain"
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
