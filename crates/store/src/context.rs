//! Explicit handle through which consumers reach the store.
//!
//! A [`StoreContext`] is created once per session and passed to every
//! presentation surface, editor, and exporter. Reading through a context
//! whose store was never installed is a wiring bug and panics immediately.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::ContextError;
use crate::store::TournamentStore;

#[derive(Debug, Default)]
pub struct StoreContext {
    store: OnceLock<Mutex<TournamentStore>>,
}

impl StoreContext {
    /// An empty context. [`StoreContext::install`] must run before any access.
    pub const fn new() -> Self {
        Self {
            store: OnceLock::new(),
        }
    }

    /// A context with `store` already installed.
    pub fn with_store(store: TournamentStore) -> Self {
        let context = Self::new();
        // A fresh OnceLock always accepts its first value.
        let _ = context.store.set(Mutex::new(store));
        context
    }

    /// Install the session's store. Only the first install succeeds.
    pub fn install(&self, store: TournamentStore) -> Result<(), ContextError> {
        self.store
            .set(Mutex::new(store))
            .map_err(|_| ContextError::AlreadyInstalled)
    }

    pub fn is_installed(&self) -> bool {
        self.store.get().is_some()
    }

    /// Run `f` with shared access to the store.
    ///
    /// # Panics
    ///
    /// Panics if no store has been installed.
    pub fn with<R>(&self, f: impl FnOnce(&TournamentStore) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// # Panics
    ///
    /// Panics if no store has been installed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut TournamentStore) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, TournamentStore> {
        let Some(store) = self.store.get() else {
            panic!("tournament store used before it was installed in its StoreContext");
        };
        store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
