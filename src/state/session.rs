//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the single authoritative record of who is signed in. Route
//! guards and pages read it through a `RwSignal<SessionState>` kept in sync by
//! `subscribe`; the gateway reads the installed credential through a
//! `CredentialSlot`. Only the session writes either.
//!
//! DESIGN
//! ======
//! Every mutation holds the state lock across the in-memory update, the paired
//! store write, and the slot update, so a commit and a clear can never
//! interleave. Store calls are synchronous, so there is no suspension point
//! inside that window. Observers run after the lock is released.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use super::store::{CredentialStore, StoreError};
use crate::net::types::{Credential, Principal};

/// Snapshot of the session as seen by views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub credential: Option<Credential>,
    pub principal: Option<Principal>,
    /// True while restoring from storage or while a login exchange is in
    /// flight. Never read as "unauthenticated".
    pub loading: bool,
}

impl SessionState {
    /// State before `Session::initialize` has run.
    pub fn restoring() -> Self {
        Self { credential: None, principal: None, loading: true }
    }

    /// Credential and principal both present.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some() && self.principal.is_some()
    }
}

/// Read-only handle to the installed credential, shared with the gateway.
#[derive(Clone, Debug, Default)]
pub struct CredentialSlot(Arc<RwLock<Option<Credential>>>);

impl CredentialSlot {
    /// The credential installed right now.
    pub fn get(&self) -> Option<Credential> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn install(&self, credential: Option<Credential>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = credential;
    }
}

type Observer = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Owner of the session. Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    slot: CredentialSlot,
    store: CredentialStore,
    observers: Arc<Mutex<Vec<Observer>>>,
}

impl Session {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::restoring())),
            slot: CredentialSlot::default(),
            store,
            observers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }

    pub fn credential_slot(&self) -> CredentialSlot {
        self.slot.clone()
    }

    /// Register `observer` to receive every changed snapshot.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(observer));
    }

    /// Restore a stored session on application start.
    ///
    /// Always finishes with `loading == false`, whether or not a session was
    /// found.
    pub fn initialize(&self) {
        self.mutate(|state, _, _| state.loading = true);
        self.mutate(|state, store, slot| {
            if let Some((credential, principal)) = store.load() {
                log::info!("restored session for {}", principal.username);
                slot.install(Some(credential.clone()));
                state.credential = Some(credential);
                state.principal = Some(principal);
            } else {
                log::debug!("no stored session");
            }
            state.loading = false;
        });
    }

    /// Install a freshly exchanged credential and principal.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] when the pair cannot be persisted. The store
    /// rolls back on a failed save, so the session is left signed out to
    /// match it.
    pub fn commit(&self, credential: Credential, principal: Principal) -> Result<(), StoreError> {
        self.mutate(|state, store, slot| {
            state.loading = false;
            if let Err(e) = store.save(&credential, &principal) {
                log::warn!("session for {} not persisted: {e}", principal.username);
                sign_out(state, slot);
                return Err(e);
            }
            slot.install(Some(credential.clone()));
            log::info!("signed in as {}", principal.username);
            state.credential = Some(credential);
            state.principal = Some(principal);
            Ok(())
        })
    }

    /// Swap in a refreshed credential, keeping the principal.
    ///
    /// Returns `false` (and changes nothing) when no one is signed in, so a
    /// refresh that resolves after a logout cannot resurrect the session.
    /// Also `false` when the new pair cannot be persisted; the store is empty
    /// after a failed save, so the session signs out with it.
    pub fn replace_credential(&self, credential: Credential) -> bool {
        self.mutate(|state, store, slot| {
            let Some(principal) = state.principal.as_ref() else {
                return false;
            };
            if state.credential.is_none() {
                return false;
            }
            if let Err(e) = store.save(&credential, principal) {
                log::warn!("refreshed credential not persisted, signing out: {e}");
                sign_out(state, slot);
                return false;
            }
            slot.install(Some(credential.clone()));
            state.credential = Some(credential);
            true
        })
    }

    /// Sign out. Calling it again is a no-op.
    pub fn clear(&self) {
        self.mutate(|state, store, slot| {
            store.clear();
            if state.credential.is_some() || state.principal.is_some() {
                log::info!("session cleared");
            }
            sign_out(state, slot);
        });
    }

    /// Mark a login exchange as in flight.
    pub fn begin_exchange(&self) {
        self.mutate(|state, _, _| state.loading = true);
    }

    /// Mark a login exchange as finished without a commit.
    pub fn end_exchange(&self) {
        self.mutate(|state, _, _| state.loading = false);
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState, &CredentialStore, &CredentialSlot) -> R) -> R {
        let (result, changed) = {
            let mut state = self.lock();
            let before = state.clone();
            let result = f(&mut state, &self.store, &self.slot);
            let changed = (*state != before).then(|| state.clone());
            (result, changed)
        };
        if let Some(snapshot) = changed {
            self.notify(&snapshot);
        }
        result
    }

    fn notify(&self, snapshot: &SessionState) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer(snapshot);
        }
    }
}

fn sign_out(state: &mut SessionState, slot: &CredentialSlot) {
    slot.install(None);
    state.credential = None;
    state.principal = None;
}
