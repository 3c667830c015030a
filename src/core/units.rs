use serde::Deserialize;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound (international avoirdupois pound)
pub const KG_PER_POUND: f64 = 0.45359237;

/// Accepted height range in inches (inclusive)
pub const HEIGHT_IN_RANGE: (f64, f64) = (24.0, 108.0);

/// Height used when the reported inches are out of range
pub const FALLBACK_HEIGHT_IN: f64 = 67.0;

/// Accepted weight range in pounds (inclusive)
pub const WEIGHT_LB_RANGE: (f64, f64) = (30.0, 1000.0);

/// Weight used when the reported pounds are out of range
pub const FALLBACK_WEIGHT_LB: f64 = 160.0;

/// Units in which a deployment accepts height and weight
///
/// Exactly one policy applies per deployment:
/// - `Metric`: cm/kg are taken as-is, no range validation
/// - `Imperial`: inches/pounds are clamped to a fallback when out of range,
///   then converted to cm/kg
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Default raw height in this system's units
    pub fn default_height(&self) -> f64 {
        match self {
            UnitSystem::Metric => 170.0,
            UnitSystem::Imperial => FALLBACK_HEIGHT_IN,
        }
    }

    /// Default raw weight in this system's units
    pub fn default_weight(&self) -> f64 {
        match self {
            UnitSystem::Metric => 70.0,
            UnitSystem::Imperial => FALLBACK_WEIGHT_LB,
        }
    }

    /// Convert a raw (height, weight) pair into (cm, kg) under this policy
    pub fn to_metric(&self, height: f64, weight: f64) -> (f64, f64) {
        match self {
            UnitSystem::Metric => (height, weight),
            UnitSystem::Imperial => (
                inches_to_cm(clamp_height_inches(height)),
                pounds_to_kg(clamp_weight_pounds(weight)),
            ),
        }
    }
}

#[inline]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

#[inline]
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_POUND
}

/// Replace an implausible height with the fallback instead of rejecting it
#[inline]
pub fn clamp_height_inches(inches: f64) -> f64 {
    clamp_or_fallback(inches, HEIGHT_IN_RANGE, FALLBACK_HEIGHT_IN)
}

/// Replace an implausible weight with the fallback instead of rejecting it
#[inline]
pub fn clamp_weight_pounds(pounds: f64) -> f64 {
    clamp_or_fallback(pounds, WEIGHT_LB_RANGE, FALLBACK_WEIGHT_LB)
}

#[inline]
fn clamp_or_fallback(value: f64, (min, max): (f64, f64), fallback: f64) -> f64 {
    if (min..=max).contains(&value) {
        value
    } else {
        fallback
    }
}
