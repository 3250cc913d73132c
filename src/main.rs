use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;
use trip_match::config::Settings;
use trip_match::core::Planner;
use trip_match::error::{handle_json_payload_error, handle_query_payload_error};
use trip_match::routes::{self, AppState};
use trip_match::services::SeedData;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Configuration comes first so the log settings can be honoured
    let settings = Settings::load();

    // Environment takes precedence over the config file
    let (cfg_level, cfg_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "json".to_string()),
    };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(cfg_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(cfg_format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting Trip Match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // Seed roster and destination catalogue
    let seed = match &settings.seed.path {
        Some(path) => SeedData::load(path),
        None => SeedData::builtin(),
    }
    .map_err(|e| {
        error!("Failed to load seed data: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!(
        "Seed data loaded: {} members, {} destinations ({} selected)",
        seed.members.len(),
        seed.destinations.len(),
        seed.selected.len()
    );

    let thresholds = settings.scoring.thresholds();
    let planner = Planner::new(thresholds);

    info!("Planner initialized with thresholds: {:?}", thresholds);

    // Build application state
    let app_state = AppState {
        planner,
        seed: Arc::new(seed),
        suggestion_limit: settings.scoring.suggestion_limit as usize,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
