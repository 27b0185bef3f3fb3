//! Scripted `Transport` and a wired-up session/gateway pair for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::ApiError;
use super::gateway::{Gateway, clear_and_redirect};
use super::transport::{ApiRequest, ApiResponse, Transport};
use super::types::{Credential, Principal};
use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::state::store::{CredentialStore, MemoryStorage};

pub(crate) enum Reply {
    Respond(ApiResponse),
    Fail(ApiError),
    /// Never answers; the gateway's timer wins.
    Hang,
}

pub(crate) fn respond(status: u16, body: &str) -> Reply {
    Reply::Respond(ApiResponse { status, body: body.to_owned() })
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    sent: Vec<ApiRequest>,
}

/// Answers requests from a queue and records what was sent. Timers fire
/// immediately, so only `Reply::Hang` ever times out.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    script: Arc<Mutex<Script>>,
}

impl FakeTransport {
    pub(crate) fn push(&self, reply: Reply) {
        self.script.lock().unwrap().replies.push_back(reply);
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().sent.clone()
    }

    pub(crate) fn last_sent(&self) -> ApiRequest {
        self.sent().pop().expect("no request sent")
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.sent.push(request);
            script.replies.pop_front().unwrap_or_else(|| respond(200, "{}"))
        };
        match reply {
            Reply::Respond(response) => Ok(response),
            Reply::Fail(err) => Err(err),
            Reply::Hang => futures::future::pending().await,
        }
    }

    async fn delay(&self, _duration: Duration) {}
}

pub(crate) struct Harness {
    pub transport: FakeTransport,
    pub storage: Arc<MemoryStorage>,
    pub store: CredentialStore,
    pub session: Session,
    pub gateway: Gateway<FakeTransport>,
    pub redirects: Arc<AtomicUsize>,
}

impl Harness {
    /// Session already initialized from empty storage.
    pub(crate) fn new() -> Self {
        let transport = FakeTransport::default();
        let storage = Arc::new(MemoryStorage::default());
        let store = CredentialStore::new(storage.clone());
        let session = Session::new(store.clone());
        session.initialize();
        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let hook = clear_and_redirect(session.clone(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let gateway = Gateway::new(transport.clone(), &ClientConfig::default(), session.credential_slot(), hook);
        Self { transport, storage, store, session, gateway, redirects }
    }

    pub(crate) fn signed_in(token: &str) -> Self {
        let harness = Self::new();
        harness.session.commit(Credential::new(token), principal()).unwrap();
        harness
    }

    pub(crate) fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

pub(crate) fn principal() -> Principal {
    Principal {
        id: 7,
        username: "dynasty_dan".to_owned(),
        display_name: "Dan".to_owned(),
        sleeper_id: "123456".to_owned(),
        email: None,
    }
}

pub(crate) fn login_body(token: &str) -> String {
    serde_json::json!({
        "token": token,
        "user": {
            "id": 7,
            "username": "dynasty_dan",
            "display_name": "Dan",
            "sleeper_id": "123456"
        }
    })
    .to_string()
}
