//! Shared current-locale storage.
//!
//! Provides thread-safe access to an engine's current locale, so every handle
//! created by the engine observes a locale change on its next resolution.

use std::sync::RwLock;

use crate::types::LocaleId;

/// The engine-scoped current-locale cell.
///
/// Scoped to one engine rather than the process. Hosts serving concurrent
/// requests with different locales should run one engine per scope or pass an
/// explicit per-call locale instead of mutating this cell.
#[derive(Debug)]
pub(crate) struct LocaleContext {
    current: RwLock<LocaleId>,
}

impl LocaleContext {
    /// Create a context holding `initial` as the current locale.
    pub(crate) fn new(initial: LocaleId) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Read the current locale.
    pub(crate) fn current(&self) -> LocaleId {
        self.current
            .read()
            .expect("locale context lock poisoned")
            .clone()
    }

    /// Replace the current locale for all subsequent reads.
    pub(crate) fn set(&self, locale: LocaleId) {
        *self.current.write().expect("locale context lock poisoned") = locale;
    }
}
