// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, Location, NutritionTargets, PrimaryGoal, UserProfile};
pub use requests::GeneratePlanRequest;
pub use responses::{ErrorResponse, GeneratePlanResponse, HealthResponse};
