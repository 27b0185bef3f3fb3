//! Durable copy of the session for restart recovery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session writes here on every commit/clear and reads once on startup.
//! This is never a second source of truth: the in-memory session owns the
//! credential, the store only lets it survive a page reload.
//!
//! Layout is two string entries: `sleepr_token` holds the raw credential and
//! `sleepr_user` a JSON `Principal`. Both absent is the logged-out state;
//! either one alone, an empty token, or unparsable JSON all read as absent.
//!
//! TRADE-OFFS
//! ==========
//! `localStorage` has no transactions. `save` writes the principal first and
//! the token last, and removes both if the token write fails, so a token is
//! never visible without its principal.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::{Credential, Principal};

pub const TOKEN_KEY: &str = "sleepr_token";
pub const PRINCIPAL_KEY: &str = "sleepr_user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (private mode, SSR).
    #[error("storage unavailable")]
    Unavailable,

    #[error("write to {key} failed: {reason}")]
    Write { key: &'static str, reason: String },

    #[error("principal serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key/value backend.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend refuses the write (quota,
    /// unavailable storage).
    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; absent keys are fine.
    fn remove(&self, key: &str);
}

/// Credential + principal pair persisted across reloads.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CredentialStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Complete pair, or `None` for missing, partial, or corrupt entries.
    pub fn load(&self) -> Option<(Credential, Principal)> {
        let token = self.storage.get(TOKEN_KEY);
        let raw_principal = self.storage.get(PRINCIPAL_KEY);
        let (token, raw_principal) = match (token, raw_principal) {
            (Some(token), Some(raw)) => (token, raw),
            (None, None) => return None,
            _ => {
                log::warn!("ignoring partial stored session");
                return None;
            }
        };
        if token.trim().is_empty() {
            log::warn!("ignoring stored session with empty token");
            return None;
        }
        match serde_json::from_str::<Principal>(&raw_principal) {
            Ok(principal) => Some((Credential::new(token), principal)),
            Err(e) => {
                log::warn!("ignoring stored session with corrupt principal: {e}");
                None
            }
        }
    }

    /// Persist both halves of the session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either write fails; in that case neither key
    /// is left behind.
    pub fn save(&self, credential: &Credential, principal: &Principal) -> Result<(), StoreError> {
        let raw_principal = serde_json::to_string(principal)?;
        let written = self
            .storage
            .set(PRINCIPAL_KEY, &raw_principal)
            .and_then(|()| self.storage.set(TOKEN_KEY, credential.as_str()));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Remove both keys. Never fails, even when already empty.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PRINCIPAL_KEY);
    }
}

/// `window.localStorage`. Outside the browser reads are empty and writes fail
/// with [`StoreError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write { key, reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process map used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    /// Make subsequent writes fail, simulating a full quota.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::Relaxed);
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes.load(Ordering::Relaxed) {
            return Err(StoreError::Write { key, reason: "quota exceeded".to_owned() });
        }
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
