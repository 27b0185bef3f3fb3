//! Request/response middleware applied to every gateway call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `attach_credential` runs immediately before a request is sent and
//! `screen_response` immediately after a response arrives. Both are plain
//! functions so the auth contract can be tested without a network.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use serde::de::DeserializeOwned;

use super::error::{ApiError, UNAUTHORIZED_STATUS};
use super::transport::{ApiRequest, ApiResponse};
use super::types::ErrorBody;
use crate::state::session::CredentialSlot;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Project the live credential onto `request`.
///
/// Reads the slot at call time; any `Authorization` header already present is
/// replaced, and none is left when the slot is empty.
#[must_use]
pub fn attach_credential(mut request: ApiRequest, slot: &CredentialSlot) -> ApiRequest {
    request
        .headers
        .retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
    if let Some(credential) = slot.get() {
        request
            .headers
            .push((AUTHORIZATION_HEADER.to_owned(), credential.bearer_header()));
    }
    request
}

/// Classify a raw response.
///
/// # Errors
///
/// 401 becomes [`ApiError::Unauthorized`]; any other non-2xx status becomes
/// [`ApiError::Status`]. Both carry the remote message when the body has one.
pub fn screen_response(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    let message = remote_message(&response.body);
    if response.status == UNAUTHORIZED_STATUS {
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Status { status: response.status, message })
}

/// Decode a successful JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn remote_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}
