// Integration tests for FitPlan

use actix_web::{http::StatusCode, test, web, App};
use fitplan::config::GeminiSettings;
use fitplan::core::UnitSystem;
use fitplan::routes::{self, plan::AppState};
use fitplan::services::GeminiClient;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use std::sync::Arc;

const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn create_state(base_url: &str, api_key: &str, units: UnitSystem) -> AppState {
    let settings = GeminiSettings {
        api_key: api_key.to_string(),
        model: "gemini-1.5-flash".to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    };

    AppState {
        gemini: Arc::new(GeminiClient::new(&settings).expect("client builds")),
        units,
    }
}

async fn gemini_server() -> ServerGuard {
    Server::new_async().await
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(routes::json_config())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!(create_state("http://127.0.0.1:9", "key", UnitSystem::Metric));

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Server is running!");
}

#[actix_web::test]
async fn test_generate_plan_success() {
    let mut server = gemini_server().await;
    let routine = "Monday: Squats 4x8\nTuesday: Rest";
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("chest, back, legs".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"candidates": [{"content": {"parts": [{"text": routine}]}}]}).to_string())
        .create_async()
        .await;

    let app = init_app!(create_state(&server.url(), "test-key", UnitSystem::Metric));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(json!({
            "gender": "female",
            "height": "165",
            "weight": 60,
            "daysPerWeek": 4,
            "hoursPerDay": 1,
            "primaryGoal": "general fitness",
            "location": "gym",
            "includeCardio": false,
            "targetMuscles": ["chest", "back", "legs", "arms"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["routine"], routine);
    assert_eq!(
        body["nutrition"],
        "Daily Calories: 2085 kcal\nProtein: 96 g\nCarbohydrates: 295 g\nFat: 58 g"
    );

    mock.assert_async().await;
}

#[actix_web::test]
async fn test_generate_plan_with_empty_body_uses_defaults() {
    let mut server = gemini_server().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Regex("full body".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Full body, 3x a week"}]}}]}"#)
        .create_async()
        .await;

    let app = init_app!(create_state(&server.url(), "test-key", UnitSystem::Metric));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(json!({}))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["routine"], "Full body, 3x a week");
}

#[actix_web::test]
async fn test_generate_plan_upstream_failure() {
    let mut server = gemini_server().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let app = init_app!(create_state(&server.url(), "test-key", UnitSystem::Metric));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(json!({"gender": "male", "height": 180, "weight": 80}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    assert!(body.get("nutrition").is_none());
    assert!(body.get("routine").is_none());
}

#[actix_web::test]
async fn test_generate_plan_missing_api_key() {
    let app = init_app!(create_state("http://127.0.0.1:9", "", UnitSystem::Metric));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(json!({"gender": "male"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_generate_plan_imperial_deployment() {
    let mut server = gemini_server().await;
    // 200in is out of range and becomes 67in (170 cm); 160lb is ~73 kg
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Regex("170 cm tall and weighs 73 kg".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let app = init_app!(create_state(&server.url(), "test-key", UnitSystem::Imperial));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .set_json(json!({"height": 200, "weight": 160}))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);

    mock.assert_async().await;
}

#[actix_web::test]
async fn test_invalid_json_body() {
    let app = init_app!(create_state("http://127.0.0.1:9", "key", UnitSystem::Metric));

    let req = test::TestRequest::post()
        .uri("/api/generate-plan")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));
}
