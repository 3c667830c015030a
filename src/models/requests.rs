use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw plan request as sent by the web client
///
/// Every field is kept untyped; nothing downstream reads these values
/// directly. They are turned into a [`crate::models::UserProfile`] by the
/// sanitizer, which supplies defaults for anything missing or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub gender: Value,
    #[serde(default)]
    pub height: Value,
    #[serde(default)]
    pub weight: Value,
    #[serde(default, alias = "days_per_week", rename = "daysPerWeek")]
    pub days_per_week: Value,
    #[serde(default, alias = "hours_per_day", rename = "hoursPerDay")]
    pub hours_per_day: Value,
    #[serde(default, alias = "primary_goal", rename = "primaryGoal")]
    pub primary_goal: Value,
    #[serde(default)]
    pub location: Value,
    #[serde(default, alias = "include_cardio", rename = "includeCardio")]
    pub include_cardio: Value,
    #[serde(default, alias = "target_muscles", rename = "targetMuscles")]
    pub target_muscles: Value,
}
