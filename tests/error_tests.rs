// Error handling tests

use axum::http::StatusCode;
use axum::response::IntoResponse;
use vl_convert_service::error::ServiceError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        ServiceError::MissingBody,
        ServiceError::Conversion("boom".to_string()),
        ServiceError::Config("bad config".to_string()),
        ServiceError::FontRegistration("no such directory".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_missing_body_message_is_exact() {
    assert_eq!(
        ServiceError::MissingBody.to_string(),
        "POST body is required"
    );
}

#[test]
fn test_conversion_error_message_template() {
    let error = ServiceError::Conversion("expected value at line 1".to_string());
    assert_eq!(
        error.to_string(),
        "conversion failed: expected value at line 1"
    );
}

#[test]
fn test_missing_body_maps_to_400() {
    let response = ServiceError::MissingBody.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_conversion_error_maps_to_400() {
    let response = ServiceError::Conversion("boom".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_config_error_maps_to_500() {
    let response = ServiceError::Config("bad".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_error_responses_are_plain_text() {
    let response = ServiceError::Conversion("boom".to_string()).into_response();
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}
