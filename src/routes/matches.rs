use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, StudentProfile};
use crate::services::CatalogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "gmat": 720,
///   "gpa": 3.6,
///   "exp": 4,
///   "goal": "Finance",
///   "budget": 90000
/// }
/// ```
///
/// Responds with a JSON array of up to 5 matches ordered by descending fit
/// score. An empty array means nothing in the catalog cleared the fit
/// threshold, which is a valid outcome rather than an error.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile: StudentProfile = req.into_inner().into();

    tracing::info!(
        "Scoring profile (gmat: {}, goal: {}) against {} universities",
        profile.gmat,
        profile.goal,
        state.catalog.len()
    );

    let outcome = state
        .matcher
        .find_matches(&profile, state.catalog.universities());

    tracing::info!(
        "Returning {} matches (from {} universities evaluated)",
        outcome.matches.len(),
        outcome.total_evaluated
    );

    HttpResponse::Ok().json(outcome.matches)
}
