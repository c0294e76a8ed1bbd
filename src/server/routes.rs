// HTTP routes configuration

use super::handlers::{
    not_found_handler, test_handler, version_handler, vg2pdf_handler, vg2png_handler,
    vg2svg_handler, vl2pdf_handler, vl2png_handler, vl2svg_handler, vl2vg_handler,
};
use super::middleware::{cors, request_id_layers};
use crate::config::AppConfig;
use crate::convert::ConvertService;
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<ConvertService>,
}

/// Build the static route table. Exact path match only; everything else
/// falls through to the 404 handler.
pub fn create_router(config: &AppConfig, converter: ConvertService) -> Router {
    let state = AppState {
        converter: Arc::new(converter),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    // A wrong method on a registered path is a routing miss like any other,
    // so every method router falls back to the 404 handler too.
    Router::new()
        .route("/api/version", get(version_handler).fallback(not_found_handler))
        .route("/test", get(test_handler).fallback(not_found_handler))
        .route("/api/vl2svg", post(vl2svg_handler).fallback(not_found_handler))
        .route("/api/vl2png", post(vl2png_handler).fallback(not_found_handler))
        .route("/api/vl2pdf", post(vl2pdf_handler).fallback(not_found_handler))
        .route("/api/vl2vg", post(vl2vg_handler).fallback(not_found_handler))
        .route("/api/vg2svg", post(vg2svg_handler).fallback(not_found_handler))
        .route("/api/vg2png", post(vg2png_handler).fallback(not_found_handler))
        .route("/api/vg2pdf", post(vg2pdf_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        // Chart specs with inline datasets can run into the megabytes
        .layer(tower_http::limit::RequestBodyLimitLayer::new(
            config.server.max_body_bytes,
        ))
        // CORS wraps routing so OPTIONS preflight is answered for any path
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
