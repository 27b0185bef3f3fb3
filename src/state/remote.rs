//! Load state for data fetched through the gateway.
//!
//! Pages hold a `RwSignal<Remote<T>>` and fill it with `load_into`; the view
//! matches on the variant.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;

pub const SIGNED_OUT_MESSAGE: &str = "Your session has ended. Please sign in again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(ApiError::Unauthorized { .. }) => Self::Failed(SIGNED_OUT_MESSAGE.to_owned()),
            Err(err) => Self::Failed(err.remote_message().map_or_else(|| err.to_string(), str::to_owned)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Reset `target` to `Loading`, run `fetch` as a local task, and store the
/// outcome. A page torn down before the fetch resolves drops the result.
pub fn load_into<T, F, Fut>(target: RwSignal<Remote<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Remote::Loading);
    leptos::task::spawn_local(async move {
        let outcome = Remote::from_result(fetch().await);
        let _ = target.try_set(outcome);
    });
}
