use super::*;

#[test]
fn default_is_loading() {
    let remote = Remote::<Vec<u8>>::default();
    assert!(remote.is_loading());
    assert!(remote.ready().is_none());
    assert!(remote.error().is_none());
}

#[test]
fn ok_becomes_ready() {
    let remote = Remote::from_result(Ok(vec![1, 2, 3]));
    assert_eq!(remote.ready(), Some(&vec![1, 2, 3]));
}

#[test]
fn unauthorized_becomes_signed_out_message() {
    let remote = Remote::<()>::from_result(Err(ApiError::Unauthorized { message: Some("expired".to_owned()) }));
    assert_eq!(remote.error(), Some(SIGNED_OUT_MESSAGE));
}

#[test]
fn remote_message_is_preferred() {
    let remote = Remote::<()>::from_result(Err(ApiError::Status {
        status: 500,
        message: Some("Sleeper sync failed".to_owned()),
    }));
    assert_eq!(remote.error(), Some("Sleeper sync failed"));
}

#[test]
fn timeout_uses_error_display() {
    let remote = Remote::<()>::from_result(Err(ApiError::Timeout { secs: 10 }));
    assert_eq!(remote.error(), Some("request timed out after 10s"));
}
