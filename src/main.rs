use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use persona_assist::config::{LogFormat, LoggingSettings, Settings};
use persona_assist::core::{KnowledgeBase, Matcher};
use persona_assist::models::{FallbackLimits, MatchThresholds};
use persona_assist::routes::{self, chat::AppState};
use persona_assist::services::{Assistant, InferenceClient};
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the level can come from it
    let settings = Settings::load();

    let logging = match &settings {
        Ok(s) => s.logging.clone(),
        Err(_) => LoggingSettings::default(),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level)))
        .with_target(false)
        .with_level(true);

    match logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    info!("Starting persona-assist chat service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let backend = InferenceClient::new(&settings.backend).map_err(|e| {
        error!("Failed to build generative backend client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if backend.has_api_key() {
        info!("Generative backend client initialized (model: {})", backend.model());
    } else {
        warn!("No backend API token configured; fallback replies will report an error");
    }

    let knowledge = Arc::new(KnowledgeBase::seeded());
    info!("Knowledge base seeded with {} pairs", knowledge.len().await);

    let thresholds = MatchThresholds::from(&settings.matching);
    let limits = FallbackLimits::from(&settings.fallback);
    let matcher = Matcher::new(thresholds);

    info!("Matcher initialized with thresholds: {:?}, fallback limits: {:?}", thresholds, limits);

    // Build application state
    let app_state = AppState {
        assistant: Arc::new(Assistant::new(knowledge, matcher, backend, limits)),
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
