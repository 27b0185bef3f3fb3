use futures::executor::block_on;

use super::*;
use crate::net::middleware::AUTHORIZATION_HEADER;
use crate::net::test_support::{Harness, Reply, login_body, principal, respond};
use crate::net::types::{Credential, Team};
use crate::util::guard::{GuardDecision, ViewKind, decide};

// =============================================================
// credential attachment
// =============================================================

#[test]
fn requests_carry_bearer_when_signed_in() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(200, "[]"));
    let teams: Vec<Team> = block_on(h.gateway.get_json("/teams")).unwrap();
    assert!(teams.is_empty());

    let sent = h.transport.last_sent();
    assert_eq!(sent.url, "http://localhost:8080/api/v1/teams");
    assert_eq!(sent.header(AUTHORIZATION_HEADER), Some("Bearer abc"));
}

#[test]
fn requests_carry_no_header_when_signed_out() {
    let h = Harness::new();
    block_on(h.gateway.post_empty("/teams/1/sync")).unwrap();
    assert_eq!(h.transport.last_sent().header(AUTHORIZATION_HEADER), None);
}

#[test]
fn replaced_credential_applies_to_next_request() {
    let h = Harness::signed_in("first");
    block_on(h.gateway.post_empty("/teams/1/sync")).unwrap();
    h.session.commit(Credential::new("second"), principal()).unwrap();
    block_on(h.gateway.post_empty("/teams/1/sync")).unwrap();

    let sent = h.transport.sent();
    assert_eq!(sent[0].header(AUTHORIZATION_HEADER), Some("Bearer first"));
    assert_eq!(sent[1].header(AUTHORIZATION_HEADER), Some("Bearer second"));
}

// =============================================================
// authorization failures
// =============================================================

#[test]
fn unauthorized_clears_session_redirects_and_rejects() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(401, "{\"error\":\"token expired\"}"));

    let result: Result<Vec<Team>, ApiError> = block_on(h.gateway.get_json("/teams"));
    assert_eq!(result, Err(ApiError::Unauthorized { message: Some("token expired".to_owned()) }));
    assert!(!h.session.is_authenticated());
    assert!(h.store.load().is_none());
    assert_eq!(h.redirect_count(), 1);
}

#[test]
fn after_unauthorized_next_request_has_no_header_and_guard_redirects() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(401, ""));
    let _ = block_on(h.gateway.post_empty("/teams/9/sync"));

    block_on(h.gateway.post_empty("/teams/9/sync")).unwrap();
    assert_eq!(h.transport.last_sent().header(AUTHORIZATION_HEADER), None);
    assert_eq!(decide(&h.session.snapshot(), ViewKind::Protected), GuardDecision::Redirect(ViewKind::LOGIN_PATH));
}

#[test]
fn unauthorized_while_signed_out_is_harmless() {
    let h = Harness::new();
    h.transport.push(respond(401, ""));
    let result = block_on(h.gateway.post_empty("/teams/1/sync"));
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.redirect_count(), 1);
}

// =============================================================
// other failures pass through
// =============================================================

#[test]
fn server_error_leaves_session_alone() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(500, "{\"error\":\"db down\"}"));
    let result = block_on(h.gateway.post_empty("/teams/1/sync"));
    assert_eq!(result, Err(ApiError::Status { status: 500, message: Some("db down".to_owned()) }));
    assert!(h.session.is_authenticated());
    assert_eq!(h.redirect_count(), 0);
}

#[test]
fn transport_error_is_passed_through_verbatim() {
    let h = Harness::signed_in("abc");
    h.transport.push(Reply::Fail(ApiError::Transport("offline".to_owned())));
    let result = block_on(h.gateway.post_empty("/teams/1/sync"));
    assert_eq!(result, Err(ApiError::Transport("offline".to_owned())));
    assert!(h.session.is_authenticated());
}

#[test]
fn timeout_is_transport_error_and_keeps_session() {
    let h = Harness::signed_in("abc");
    h.transport.push(Reply::Hang);
    let result = block_on(h.gateway.post_empty("/teams/1/sync"));
    assert_eq!(result, Err(ApiError::Timeout { secs: 10 }));
    assert!(h.session.is_authenticated());
    assert!(h.store.load().is_some());
    assert_eq!(h.redirect_count(), 0);
}

#[test]
fn no_retry_on_failure() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(503, ""));
    let _ = block_on(h.gateway.post_empty("/teams/1/sync"));
    assert_eq!(h.transport.sent().len(), 1);
}

#[test]
fn malformed_success_body_is_decode_error() {
    let h = Harness::signed_in("abc");
    h.transport.push(respond(200, "not json"));
    let result: Result<Vec<Team>, ApiError> = block_on(h.gateway.get_json("/teams"));
    assert!(matches!(result, Err(ApiError::Decode(_))));
    assert!(h.session.is_authenticated());
}

// =============================================================
// login / refresh
// =============================================================

#[test]
fn login_posts_handle_and_sleeper_id() {
    let h = Harness::new();
    h.transport.push(respond(200, &login_body("abc")));
    let response = block_on(h.gateway.login("dynasty_dan", "123456")).unwrap();
    assert_eq!(response.token, Credential::new("abc"));
    assert_eq!(response.user, principal());

    let sent = h.transport.last_sent();
    assert_eq!(sent.url, "http://localhost:8080/api/v1/public/auth/login");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "dynasty_dan", "sleeper_id": "123456" }));
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
}

#[test]
fn login_does_not_touch_session_by_itself() {
    let h = Harness::new();
    h.transport.push(respond(200, &login_body("abc")));
    block_on(h.gateway.login("dynasty_dan", "123456")).unwrap();
    assert!(!h.session.is_authenticated());
}

#[test]
fn login_failure_is_propagated_verbatim() {
    let h = Harness::new();
    h.transport.push(respond(400, "{\"error\":\"Invalid request format\"}"));
    let result = block_on(h.gateway.login("dynasty_dan", "123456"));
    assert_eq!(
        result,
        Err(ApiError::Status { status: 400, message: Some("Invalid request format".to_owned()) })
    );
    assert_eq!(h.transport.sent().len(), 1);
}

#[test]
fn refresh_installs_new_credential_for_next_request() {
    let h = Harness::signed_in("old");
    h.transport.push(respond(200, "{\"token\":\"new\"}"));
    block_on(h.gateway.refresh(&h.session)).unwrap();
    assert_eq!(h.transport.last_sent().url, "http://localhost:8080/api/v1/auth/refresh");
    assert_eq!(h.transport.last_sent().header(AUTHORIZATION_HEADER), Some("Bearer old"));

    block_on(h.gateway.post_empty("/teams/1/sync")).unwrap();
    assert_eq!(h.transport.last_sent().header(AUTHORIZATION_HEADER), Some("Bearer new"));
    assert_eq!(h.store.load().map(|(c, _)| c), Some(Credential::new("new")));
}

#[test]
fn refresh_rejected_signs_out() {
    let h = Harness::signed_in("old");
    h.transport.push(respond(401, ""));
    let result = block_on(h.gateway.refresh(&h.session));
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert!(!h.session.is_authenticated());
}
