use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{ChatRequest, ChatResponse, ErrorResponse, FeedbackRequest, FeedbackResponse, HealthResponse};
use crate::services::Assistant;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
}

/// Configure all chat-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/chat", web::post().to(chat))
        .route("/feedback", web::post().to(feedback));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let backend_configured = state.assistant.backend().has_api_key();
    let status = if backend_configured { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        knowledge_pairs: state.assistant.knowledge().len().await,
        backend_configured,
        timestamp: chrono::Utc::now(),
    })
}

/// Chat endpoint
///
/// POST /chatbot/chat
///
/// Request body:
/// ```json
/// { "message": "string" }
/// ```
///
/// Always answers 200; backend failures come back as `"Error: ..."` text.
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let reply = state.assistant.answer(&req.message).await;

    tracing::info!(source = reply.source(), message_len = req.message.len(), "Chat reply");

    HttpResponse::Ok().json(ChatResponse {
        response: reply.into_text(),
    })
}

/// Feedback endpoint
///
/// POST /chatbot/feedback
///
/// Request body:
/// ```json
/// { "message": "string", "correct_response": "string" }
/// ```
async fn feedback(state: web::Data<AppState>, req: web::Json<FeedbackRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for feedback request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let total_pairs = state
        .assistant
        .add_pair(&req.message, &req.correct_response)
        .await;

    HttpResponse::Ok().json(FeedbackResponse {
        message: "Feedback received and conversations updated".to_string(),
        total_pairs,
    })
}
