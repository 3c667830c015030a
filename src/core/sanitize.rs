use serde_json::Value;

use crate::core::units::UnitSystem;
use crate::models::{Gender, GeneratePlanRequest, Location, PrimaryGoal, UserProfile};

pub const DEFAULT_GENDER: &str = "other";
pub const DEFAULT_PRIMARY_GOAL: &str = "general fitness";
pub const DEFAULT_LOCATION: &str = "gym";
pub const DEFAULT_DAYS_PER_WEEK: i64 = 4;
pub const DEFAULT_HOURS_PER_DAY: f64 = 1.0;
pub const DEFAULT_TARGET_MUSCLE: &str = "full body";

/// Coerce a loosely typed value into a float
///
/// Missing, null, blank, non-numeric and non-finite inputs all fall back to
/// `default`. Never fails.
pub fn safe_float(value: Option<&Value>, default: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Coerce a loosely typed value into an integer
///
/// Parses as a float first so that `"3.0"` is accepted, then truncates.
pub fn safe_int(value: Option<&Value>, default: i64) -> i64 {
    safe_float(value, default as f64).trunc() as i64
}

/// Coerce a loosely typed value into a boolean
pub fn safe_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|v| v != 0.0).unwrap_or(default),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Coerce a loosely typed value into a non-empty string
pub fn safe_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

/// Collect the requested muscle groups, falling back to a full body plan
pub fn safe_muscles(value: Option<&Value>) -> Vec<String> {
    let muscles: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    };

    if muscles.is_empty() {
        vec![DEFAULT_TARGET_MUSCLE.to_string()]
    } else {
        muscles
    }
}

/// Build a [`UserProfile`] from a raw request
///
/// This is the only way a profile is constructed. Height and weight are read
/// in the deployment's unit system and converted to cm/kg.
pub fn sanitize_profile(request: &GeneratePlanRequest, units: UnitSystem) -> UserProfile {
    let raw_height = safe_float(Some(&request.height), units.default_height());
    let raw_weight = safe_float(Some(&request.weight), units.default_weight());
    let (height_cm, weight_kg) = units.to_metric(raw_height, raw_weight);

    UserProfile {
        gender: Gender::parse(&safe_string(Some(&request.gender), DEFAULT_GENDER)),
        height_cm,
        weight_kg,
        primary_goal: PrimaryGoal::parse(&safe_string(
            Some(&request.primary_goal),
            DEFAULT_PRIMARY_GOAL,
        )),
        days_per_week: safe_int(Some(&request.days_per_week), DEFAULT_DAYS_PER_WEEK),
        hours_per_day: safe_float(Some(&request.hours_per_day), DEFAULT_HOURS_PER_DAY),
        location: Location::parse(&safe_string(Some(&request.location), DEFAULT_LOCATION)),
        include_cardio: safe_bool(Some(&request.include_cardio), false),
        target_muscles: safe_muscles(Some(&request.target_muscles)),
    }
}
