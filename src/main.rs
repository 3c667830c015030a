use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use fitplan::config::{LoggingSettings, Settings};
use fitplan::routes::{self, plan::AppState};
use fitplan::services::GeminiClient;
use std::io;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting FitPlan service...");
    info!("Accepting {:?} height/weight input", settings.units.system);

    if settings.gemini.api_key.trim().is_empty() {
        warn!("No Gemini API key configured (set GEMINI_API_KEY); plan requests will fail");
    }

    let gemini = GeminiClient::new(&settings.gemini)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    info!("Gemini client initialized (model: {})", gemini.model());

    let app_state = AppState {
        gemini: Arc::new(gemini),
        units: settings.units.system,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
