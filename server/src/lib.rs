use anyhow::Result;
use axum::{extract::{Path, State}, http::StatusCode, routing::{get, post}, Json, Router};
use bridge_core::persist::load_catalog;
use bridge_core::{train, CourseSummary, Engine, EngineConfig, Recommendation, Strategy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct RecommendRequest {
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub strategy: Strategy,
    pub took_s: f64,
    pub total: usize,
    pub recommendations: Vec<RecommendationView>,
}

#[derive(Serialize)]
pub struct RecommendationView {
    pub skill: String,
    pub courses: Vec<CourseSummary>,
}

impl From<&Recommendation<'_>> for RecommendationView {
    fn from(rec: &Recommendation<'_>) -> Self {
        Self { skill: rec.skill.clone(), courses: rec.courses.iter().map(|c| CourseSummary::from(*c)).collect() }
    }
}

/// Trained once at startup; every request only reads it.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

pub fn build_app(catalog_path: &str, config: &EngineConfig) -> Result<Router> {
    let records = load_catalog(catalog_path)?;
    let engine = train(records, config)?;
    Ok(router(Arc::new(engine)))
}

pub fn router(engine: Arc<Engine>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", post(recommend_handler))
        .route("/course/:id", get(course_handler))
        .with_state(AppState { engine })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn recommend_handler(State(state): State<AppState>, Json(req): Json<RecommendRequest>) -> Json<RecommendResponse> {
    let start = std::time::Instant::now();
    let recommendations: Vec<RecommendationView> =
        state.engine.recommend(&req.skills).iter().map(RecommendationView::from).collect();
    let elapsed = start.elapsed();
    tracing::debug!(skills = req.skills.len(), matched = recommendations.len(), "recommend request");
    Json(RecommendResponse {
        strategy: state.engine.strategy(),
        took_s: elapsed.as_secs_f64(),
        total: recommendations.len(),
        recommendations,
    })
}

pub async fn course_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match state.engine.record(&id) {
        Some(record) => Ok(Json(serde_json::json!(record))),
        None => Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" })))),
    }
}
