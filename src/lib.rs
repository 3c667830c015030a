//! FitPlan - nutrition targets and AI-generated workout plans
//!
//! This library turns loosely typed body metrics and training preferences into
//! deterministic calorie and macro targets, and builds the prompt used to ask
//! a generative model for a weekly workout routine.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_targets, sanitize_profile, UnitSystem};
pub use models::{GeneratePlanRequest, NutritionTargets, UserProfile};
