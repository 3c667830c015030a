use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;

use crate::core::{build_prompt, sanitize_profile, targets_for_profile, UnitSystem};
use crate::models::{ErrorResponse, GeneratePlanRequest, GeneratePlanResponse, HealthResponse};
use crate::services::GeminiClient;

/// Application state shared across all handlers
///
/// Built once at startup from [`crate::config::Settings`]; handlers never
/// read configuration from anywhere else.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
    pub units: UnitSystem,
}

/// Configure plan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(health_check))
        .route("/api/generate-plan", web::post().to(generate_plan));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        message: "Server is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Generate plan endpoint
///
/// POST /api/generate-plan
///
/// Request body (every field optional, loosely typed):
/// ```json
/// {
///   "gender": "female",
///   "height": 165,
///   "weight": "60",
///   "daysPerWeek": 4,
///   "hoursPerDay": 1,
///   "primaryGoal": "muscle gain",
///   "location": "gym",
///   "includeCardio": true,
///   "targetMuscles": ["chest", "back"]
/// }
/// ```
///
/// Nutrition is computed locally; the routine is whatever the model returns.
/// Either both are returned or neither is.
async fn generate_plan(
    state: web::Data<AppState>,
    req: web::Json<GeneratePlanRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("generate_plan", %request_id);

    async move {
        let profile = sanitize_profile(&req, state.units);
        let targets = targets_for_profile(&profile);

        tracing::info!(
            "Computed targets: {} kcal (goal: {}, {:.1} cm, {:.1} kg)",
            targets.daily_calories,
            profile.primary_goal.label(),
            profile.height_cm,
            profile.weight_kg
        );

        let prompt = build_prompt(&profile);

        match state.gemini.generate(&prompt).await {
            Ok(routine) => {
                tracing::info!("Generated routine ({} chars) with {}", routine.len(), state.gemini.model());
                HttpResponse::Ok().json(GeneratePlanResponse::new(routine, targets.to_string()))
            }
            Err(e) => {
                tracing::error!("Failed to generate routine: {}", e);
                HttpResponse::InternalServerError()
                    .json(ErrorResponse::new("Failed to generate workout plan. Please try again later."))
            }
        }
    }
    .instrument(span)
    .await
}
