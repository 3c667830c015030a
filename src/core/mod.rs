// Core algorithm exports
pub mod nutrition;
pub mod prompt;
pub mod sanitize;
pub mod units;

pub use nutrition::{basal_metabolic_rate, calculate_targets, targets_for_profile, MacroSplit};
pub use prompt::build_prompt;
pub use sanitize::{safe_bool, safe_float, safe_int, safe_muscles, safe_string, sanitize_profile};
pub use units::{inches_to_cm, pounds_to_kg, UnitSystem};
