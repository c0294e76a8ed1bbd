// End-to-end conversion tests exercising the real renderer through the
// HTTP surface. These are slower than the routing tests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vl_convert_service::config::AppConfig;
use vl_convert_service::convert::ConvertService;
use vl_convert_service::server::create_router;

/// A minimal Vega-Lite chart: a single point mark with inline data, so no
/// external resources are fetched.
const VL_SPEC: &str = r#"{
    "data": {"values": [{"a": 1, "b": 2}]},
    "mark": "point",
    "encoding": {
        "x": {"field": "a", "type": "quantitative"},
        "y": {"field": "b", "type": "quantitative"}
    }
}"#;

/// A minimal Vega spec with no marks at all.
const VG_SPEC: &str = r#"{
    "$schema": "https://vega.github.io/schema/vega/v5.json",
    "width": 50,
    "height": 50,
    "marks": []
}"#;

fn test_app() -> Router {
    let config = AppConfig::default();
    let converter = ConvertService::new(&config.converter);
    create_router(&config, converter)
}

async fn post(app: Router, uri: &str, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn test_vl2svg_renders_svg() {
    let response = post(test_app(), "/api/vl2svg", VL_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("<svg"), "unexpected body: {body}");
}

#[tokio::test]
async fn test_vl2png_renders_png() {
    let response = post(test_app(), "/api/vl2png", VL_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let body = body_bytes(response).await;
    assert!(body.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[tokio::test]
async fn test_vl2png_scale_changes_dimensions() {
    let unscaled = body_bytes(post(test_app(), "/api/vl2png", VL_SPEC).await).await;
    let scaled = body_bytes(post(test_app(), "/api/vl2png?scale=2", VL_SPEC).await).await;

    // PNG IHDR width lives at bytes 16..20
    let width = |png: &[u8]| u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    assert!(width(&scaled) > width(&unscaled));
}

#[tokio::test]
async fn test_vl2pdf_renders_pdf() {
    let response = post(test_app(), "/api/vl2pdf", VL_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");

    let body = body_bytes(response).await;
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_vl2vg_compiles_to_vega() {
    let response = post(test_app(), "/api/vl2vg", VL_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json.is_object());
    assert!(json.get("marks").is_some(), "compiled Vega spec has marks");
}

#[tokio::test]
async fn test_vg2svg_renders_svg() {
    let response = post(test_app(), "/api/vg2svg", VG_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("<svg"));
}

#[tokio::test]
async fn test_vg2png_renders_png() {
    let response = post(test_app(), "/api/vg2png", VG_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert!(body.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[tokio::test]
async fn test_vg2pdf_renders_pdf() {
    let response = post(test_app(), "/api/vg2pdf", VG_SPEC).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_malformed_spec_fails_conversion() {
    let response = post(test_app(), "/api/vl2svg", "this is not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("conversion failed: "));
}

#[tokio::test]
async fn test_unknown_vl_version_fails_conversion() {
    let response = post(test_app(), "/api/vl2svg?vl_version=nope", VL_SPEC).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("conversion failed: "));
}

#[tokio::test]
async fn test_disallowed_external_data_url_fails_conversion() {
    let spec = r#"{
        "data": {"url": "https://example.com/data.json"},
        "mark": "point"
    }"#;

    let response = post(test_app(), "/api/vl2svg", spec).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.starts_with("conversion failed: "));
}
