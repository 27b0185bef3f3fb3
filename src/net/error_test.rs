use super::*;

#[test]
fn remote_message_comes_from_status_and_unauthorized_only() {
    let status = ApiError::Status { status: 500, message: Some("Failed to create user".to_owned()) };
    assert_eq!(status.remote_message(), Some("Failed to create user"));

    let unauthorized = ApiError::Unauthorized { message: Some("token expired".to_owned()) };
    assert_eq!(unauthorized.remote_message(), Some("token expired"));

    assert_eq!(ApiError::Transport("offline".to_owned()).remote_message(), None);
    assert_eq!(ApiError::Timeout { secs: 10 }.remote_message(), None);
}

#[test]
fn display_formats_include_context() {
    assert_eq!(ApiError::Timeout { secs: 10 }.to_string(), "request timed out after 10s");
    assert_eq!(ApiError::Status { status: 503, message: None }.to_string(), "request failed: 503");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "network error: offline");
}

#[test]
fn only_unauthorized_reports_is_unauthorized() {
    assert!(ApiError::Unauthorized { message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Timeout { secs: 10 }.is_unauthorized());
}
