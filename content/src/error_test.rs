use super::*;

// =============================================================
// Classification
// =============================================================

#[test]
fn status_helpers_classify_codes() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(404, "").is_not_found());
    assert!(!ApiError::from_status(500, "").is_unauthorized());
    assert!(!ApiError::NoResponse.is_not_found());
    assert_eq!(ApiError::Local("x".to_owned()).status(), None);
}

#[test]
fn load_message_distinguishes_not_found() {
    assert_eq!(ApiError::from_status(404, "").load_message(), "Blog not found");
    assert_eq!(ApiError::from_status(500, "").load_message(), "Failed to load blog");
    assert_eq!(ApiError::NoResponse.load_message(), "Failed to load blog");
}

// =============================================================
// Create message priority
// =============================================================

#[test]
fn create_message_prefers_error_field() {
    let err = ApiError::from_status(400, r#"{"error":"Title taken","message":"ignored"}"#);
    assert_eq!(err.create_message(), "Title taken");
}

#[test]
fn create_message_falls_back_to_message_field() {
    let err = ApiError::from_status(413, r#"{"message":"File too large"}"#);
    assert_eq!(err.create_message(), "File too large");
}

#[test]
fn create_message_serializes_unrecognized_json() {
    let err = ApiError::from_status(500, r#"{ "code": 17, "detail": ["a"] }"#);
    assert_eq!(err.create_message(), r#"{"code":17,"detail":["a"]}"#);
}

#[test]
fn create_message_uses_raw_text_body() {
    let err = ApiError::from_status(502, "  Bad Gateway \n");
    assert_eq!(err.create_message(), "Bad Gateway");
}

#[test]
fn create_message_empty_body_uses_generic_text() {
    assert_eq!(ApiError::from_status(500, "").create_message(), CREATE_FAILED_MESSAGE);
    assert_eq!(ApiError::from_status(500, "null").create_message(), CREATE_FAILED_MESSAGE);
}

#[test]
fn create_message_no_response_and_local() {
    assert_eq!(
        ApiError::NoResponse.create_message(),
        "No response from server. Please check if the server is running."
    );
    assert_eq!(ApiError::Local("FormData unavailable".to_owned()).create_message(), "FormData unavailable");
    assert_eq!(ApiError::Local(String::new()).create_message(), CREATE_FAILED_MESSAGE);
}

// =============================================================
// Comment message
// =============================================================

#[test]
fn comment_message_uses_error_field_only() {
    assert_eq!(ApiError::from_status(400, r#"{"error":"Too long"}"#).comment_message(), "Too long");
    assert_eq!(
        ApiError::from_status(400, r#"{"message":"ignored"}"#).comment_message(),
        "Failed to add comment"
    );
    assert_eq!(ApiError::NoResponse.comment_message(), COMMENT_FAILED_MESSAGE);
}

#[test]
fn display_no_response_matches_notice() {
    assert_eq!(ApiError::NoResponse.to_string(), NO_RESPONSE_MESSAGE);
    assert_eq!(ApiError::from_status(503, "").to_string(), "HTTP 503");
}
