// HTTP request handlers

use super::routes::AppState;
use crate::convert::{parse_scale, VegaLiteParams, VERSION};
use crate::error::{Result, ServiceError};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const PNG_CONTENT_TYPE: &str = "image/png";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Query parameters accepted by the conversion endpoints.
///
/// Unknown parameters are ignored by serde; each endpoint reads only the
/// subset it supports. `scale` stays a raw string here so parse failures can
/// surface as conversion errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub vl_version: Option<String>,
    pub theme: Option<String>,
    pub scale: Option<String>,
}

impl ConvertQuery {
    fn vegalite_params(&self) -> VegaLiteParams {
        VegaLiteParams {
            vl_version: non_empty(&self.vl_version),
            theme: non_empty(&self.theme),
        }
    }

    /// Parameters for `/api/vl2vg`, which takes no theme.
    fn vegalite_version_params(&self) -> VegaLiteParams {
        VegaLiteParams {
            vl_version: non_empty(&self.vl_version),
            theme: None,
        }
    }

    fn scale(&self) -> Result<f32> {
        parse_scale(self.scale.as_deref())
    }
}

/// Empty values are treated as absent, matching query strings like `?theme=`.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn require_body(body: String) -> Result<String> {
    if body.is_empty() {
        return Err(ServiceError::MissingBody);
    }
    Ok(body)
}

fn typed<B: IntoResponse>(content_type: &'static str, body: B) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

/// Handler for GET /api/version
pub async fn version_handler() -> Response {
    typed("text/plain", VERSION)
}

/// Handler for GET /test (liveness check)
pub async fn test_handler() -> Response {
    // Exact bytes, including the space; callers compare literally.
    typed("application/json", "{\"ok\": true}")
}

/// Fallback for unregistered paths: 404 with an empty body.
pub async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Handler for POST /api/vl2svg
pub async fn vl2svg_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let svg = state
        .converter
        .vegalite_to_svg(&body, &query.vegalite_params())
        .await?;
    Ok(typed(SVG_CONTENT_TYPE, svg))
}

/// Handler for POST /api/vl2png
pub async fn vl2png_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let scale = query.scale()?;
    let png = state
        .converter
        .vegalite_to_png(&body, &query.vegalite_params(), scale)
        .await?;
    Ok(typed(PNG_CONTENT_TYPE, png))
}

/// Handler for POST /api/vl2pdf
pub async fn vl2pdf_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let scale = query.scale()?;
    let pdf = state
        .converter
        .vegalite_to_pdf(&body, &query.vegalite_params(), scale)
        .await?;
    Ok(typed(PDF_CONTENT_TYPE, pdf))
}

/// Handler for POST /api/vl2vg (compile Vega-Lite to Vega)
pub async fn vl2vg_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let vega = state
        .converter
        .vegalite_to_vega(&body, &query.vegalite_version_params())
        .await?;
    Ok(Json(vega).into_response())
}

/// Handler for POST /api/vg2svg
pub async fn vg2svg_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let svg = state.converter.vega_to_svg(&body).await?;
    Ok(typed(SVG_CONTENT_TYPE, svg))
}

/// Handler for POST /api/vg2png
pub async fn vg2png_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let scale = query.scale()?;
    let png = state.converter.vega_to_png(&body, scale).await?;
    Ok(typed(PNG_CONTENT_TYPE, png))
}

/// Handler for POST /api/vg2pdf
pub async fn vg2pdf_handler(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
    body: String,
) -> Result<Response> {
    let body = require_body(body)?;
    let scale = query.scale()?;
    let pdf = state.converter.vega_to_pdf(&body, scale).await?;
    Ok(typed(PDF_CONTENT_TYPE, pdf))
}
