//! HTTP backend abstraction under the gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, timers via
//! `gloo-timers`.
//! Server-side (SSR) and native tests: `BrowserTransport` reports itself as
//! unavailable; tests supply their own `Transport` instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt::Display;
use std::time::Duration;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully prepared outbound request as handed to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON-encoded body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        self.body = Some(body);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response as seen by the response middleware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two runtime hooks the gateway needs: sending a request and sleeping.
///
/// Implementations must not retry or reshape responses; that policy belongs
/// to the gateway.
#[allow(async_fn_in_trait)]
pub trait Transport: Clone + 'static {
    /// Perform one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Resolve after `duration`. Used to bound each request.
    async fn delay(&self, duration: Duration);
}

/// A response whose body cannot be read never arrived as far as callers are
/// concerned.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn read_body<E: Display>(body: Result<String, E>) -> Result<String, ApiError> {
    body.map_err(|e| ApiError::Transport(format!("response body unreadable: {e}")))
}

/// Browser `fetch` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .body(body)
                        .map_err(|e| ApiError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = read_body(resp.text().await)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn delay(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            futures::future::pending::<()>().await;
        }
    }
}
