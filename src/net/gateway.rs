//! Transport gateway: the only path from the client to the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the login flow call typed helpers here; every call goes through
//! `attach_credential` on the way out and `screen_response` on the way back.
//! A 401 from any call site triggers the auth-failure hook (session clear +
//! redirect to `/login`) before the error is returned to the caller.
//!
//! ERROR HANDLING
//! ==============
//! Results are `Result<T, ApiError>`. The gateway does not retry, rate-limit,
//! or rewrite non-auth failures; a timeout is a transport error and leaves the
//! session alone.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::pin::pin;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{Either, select};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::middleware::{attach_credential, decode_json, screen_response};
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{LoginRequest, LoginResponse, RefreshResponse};
use crate::config::ClientConfig;
use crate::state::session::{CredentialSlot, Session};

pub const LOGIN_ENDPOINT: &str = "/public/auth/login";
pub const REFRESH_ENDPOINT: &str = "/auth/refresh";

/// Invoked once per observed authorization failure.
pub type AuthFailureHook = Arc<dyn Fn() + Send + Sync>;

/// Build the standard auth-failure hook: clear `session`, then ask the router
/// to show the login view via `redirect`.
pub fn clear_and_redirect(session: Session, redirect: impl Fn() + Send + Sync + 'static) -> AuthFailureHook {
    Arc::new(move || {
        session.clear();
        redirect();
    })
}

#[derive(Clone)]
pub struct Gateway<T: Transport> {
    transport: T,
    base_url: String,
    timeout: Duration,
    slot: CredentialSlot,
    on_auth_failure: AuthFailureHook,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, config: &ClientConfig, slot: CredentialSlot, on_auth_failure: AuthFailureHook) -> Self {
        Self {
            transport,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            slot,
            on_auth_failure,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send one request through both middlewares and the timeout.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; an [`ApiError::Unauthorized`] has already cleared
    /// the session when it is returned.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = attach_credential(request, &self.slot);
        let method = request.method;
        let url = request.url.clone();
        log::debug!("{method:?} {url}");

        let outcome = {
            let send = pin!(self.transport.send(request));
            let timer = pin!(self.transport.delay(self.timeout));
            match select(send, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(ApiError::Timeout { secs: self.timeout.as_secs() }),
            }
        };

        match outcome.and_then(screen_response) {
            Err(err @ ApiError::Unauthorized { .. }) => {
                log::warn!("{method:?} {url} rejected credential; signing out");
                (self.on_auth_failure)();
                Err(err)
            }
            Err(err) => {
                log::warn!("{method:?} {url} failed: {err}");
                Err(err)
            }
            ok => ok,
        }
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// See [`Gateway::send`]; decode failures are [`ApiError::Decode`].
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.send(ApiRequest::new(Method::Get, self.url(path))).await?;
        decode_json(&response)
    }

    /// `POST path` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`Gateway::get_json`].
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, self.url(path)).with_json_body(body);
        let response = self.send(request).await?;
        decode_json(&response)
    }

    /// `POST path` without a body, ignoring the reply body.
    ///
    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(ApiRequest::new(Method::Post, self.url(path))).await?;
        Ok(())
    }

    /// Exchange a handle and Sleeper ID for a credential.
    ///
    /// # Errors
    ///
    /// The remote failure verbatim; there is no retry.
    pub async fn login(&self, handle: &str, external_id: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { username: handle.to_owned(), sleeper_id: external_id.to_owned() };
        self.post_json(LOGIN_ENDPOINT, &body).await
    }

    /// Trade the installed credential for a fresh one and install it.
    ///
    /// # Errors
    ///
    /// See [`Gateway::send`].
    pub async fn refresh(&self, session: &Session) -> Result<(), ApiError> {
        let response = self.send(ApiRequest::new(Method::Post, self.url(REFRESH_ENDPOINT))).await?;
        let RefreshResponse { token } = decode_json(&response)?;
        if !session.replace_credential(token) {
            log::debug!("refresh resolved after sign-out; dropped");
        }
        Ok(())
    }
}
