//! Session Store
//!
//! Holds the single bearer token. Passed explicitly to whoever needs it
//! so tests can swap in an in-memory store.

/// get / set / clear over one opaque token
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    fn is_signed_in(&self) -> bool {
        self.get().is_some()
    }
}

/// Token persisted in the browser's localStorage
#[derive(Debug, Clone)]
pub struct LocalSession {
    key: String,
}

impl LocalSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalSession {
    fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, session not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            log::warn!("failed to persist session: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("failed to clear session: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemorySession;
