use super::*;

// =============================================================
// Display
// =============================================================

#[test]
fn network_error_displays_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_error_displays_code() {
    let err = ApiError::Status { status: 500, body: None };
    assert_eq!(err.to_string(), "HTTP 500");
}

#[test]
fn decode_error_displays_cause() {
    let err = ApiError::Decode("expected value at line 1".to_owned());
    assert_eq!(err.to_string(), "failed to decode response body: expected value at line 1");
}

// =============================================================
// validation_body
// =============================================================

#[test]
fn validation_body_present_for_400_with_object_body() {
    let err = ApiError::Status {
        status: 400,
        body: Some(serde_json::json!({"email": ["already exists"]})),
    };
    let body = err.validation_body().expect("object body");
    assert!(body.contains_key("email"));
}

#[test]
fn validation_body_absent_for_400_without_body() {
    let err = ApiError::Status { status: 400, body: None };
    assert_eq!(err.validation_body(), None);
}

#[test]
fn validation_body_absent_for_400_with_non_object_body() {
    let err = ApiError::Status {
        status: 400,
        body: Some(serde_json::json!("bad request")),
    };
    assert_eq!(err.validation_body(), None);
}

#[test]
fn validation_body_absent_for_other_statuses() {
    let err = ApiError::Status {
        status: 500,
        body: Some(serde_json::json!({"email": ["already exists"]})),
    };
    assert_eq!(err.validation_body(), None);
}

#[test]
fn validation_body_absent_for_network_and_decode_errors() {
    assert_eq!(ApiError::Network("down".to_owned()).validation_body(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).validation_body(), None);
}
