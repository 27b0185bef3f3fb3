use super::*;
use crate::net::test_support::Harness;
use crate::net::transport::Method;
use crate::net::types::{Credential, Player};

fn request() -> ApiRequest {
    ApiRequest::new(Method::Get, "http://localhost:8080/api/v1/teams")
}

// =============================================================
// attach_credential
// =============================================================

#[test]
fn no_credential_means_no_header() {
    let harness = Harness::new();
    let req = attach_credential(request(), &harness.session.credential_slot());
    assert_eq!(req.header(AUTHORIZATION_HEADER), None);
}

#[test]
fn installed_credential_becomes_bearer_header() {
    let harness = Harness::signed_in("abc");
    let req = attach_credential(request(), &harness.session.credential_slot());
    assert_eq!(req.header("authorization"), Some("Bearer abc"));
}

#[test]
fn header_tracks_live_slot_not_construction_time() {
    let harness = Harness::signed_in("first");
    let slot = harness.session.credential_slot();
    harness
        .session
        .commit(Credential::new("second"), crate::net::test_support::principal())
        .unwrap();
    let req = attach_credential(request(), &slot);
    assert_eq!(req.header(AUTHORIZATION_HEADER), Some("Bearer second"));
}

#[test]
fn stale_authorization_header_is_stripped() {
    let harness = Harness::new();
    let mut req = request();
    req.headers.push(("authorization".to_owned(), "Bearer stale".to_owned()));
    let req = attach_credential(req, &harness.session.credential_slot());
    assert_eq!(req.header(AUTHORIZATION_HEADER), None);
}

// =============================================================
// screen_response
// =============================================================

#[test]
fn success_passes_through_unchanged() {
    let resp = ApiResponse { status: 201, body: "{\"ok\":true}".to_owned() };
    assert_eq!(screen_response(resp.clone()), Ok(resp));
}

#[test]
fn unauthorized_status_maps_to_unauthorized() {
    let resp = ApiResponse { status: 401, body: "{\"error\":\"Invalid token\"}".to_owned() };
    assert_eq!(
        screen_response(resp),
        Err(ApiError::Unauthorized { message: Some("Invalid token".to_owned()) })
    );
}

#[test]
fn forbidden_is_not_an_authorization_failure() {
    let resp = ApiResponse { status: 403, body: String::new() };
    assert_eq!(screen_response(resp), Err(ApiError::Status { status: 403, message: None }));
}

#[test]
fn server_error_keeps_remote_message() {
    let resp = ApiResponse { status: 500, body: "{\"message\":\"Sleeper is down\"}".to_owned() };
    assert_eq!(
        screen_response(resp),
        Err(ApiError::Status { status: 500, message: Some("Sleeper is down".to_owned()) })
    );
}

#[test]
fn non_json_error_body_has_no_message() {
    let resp = ApiResponse { status: 502, body: "<html>Bad Gateway</html>".to_owned() };
    assert_eq!(screen_response(resp), Err(ApiError::Status { status: 502, message: None }));
}

// =============================================================
// decode_json
// =============================================================

#[test]
fn decode_json_reads_typed_body() {
    let resp = ApiResponse {
        status: 200,
        body: r#"[{"id":1,"name":"Josh Allen","position":"QB","team":"BUF","fantasy_points":24.5}]"#.to_owned(),
    };
    let players: Vec<Player> = decode_json(&resp).unwrap();
    assert_eq!(players[0].name, "Josh Allen");
}

#[test]
fn decode_json_shape_mismatch_is_decode_error() {
    let resp = ApiResponse { status: 200, body: "{\"unexpected\":1}".to_owned() };
    let decoded: Result<Vec<Player>, ApiError> = decode_json(&resp);
    assert!(matches!(decoded, Err(ApiError::Decode(_))));
}
