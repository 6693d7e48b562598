//! Sync Feedback
//!
//! Routes the outcome of an engine call to where the user sees it:
//! inline text, a browser alert, or a redirect to the auth page.

use leptos::prelude::*;

use crate::context::Engine;
use crate::error::SyncError;
use crate::store::{store_publish, DashboardStore};

#[derive(Clone, Copy)]
pub struct SyncFeedback {
    store: DashboardStore,
    signed_out: ReadSignal<bool>,
    set_signed_out: WriteSignal<bool>,
}

impl SyncFeedback {
    pub fn new(store: DashboardStore, signed_out: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            store,
            signed_out: signed_out.0,
            set_signed_out: signed_out.1,
        }
    }

    /// Publish the engine's list, then surface `result`. A validation
    /// message is handed back for inline display.
    pub fn settle(&self, engine: &Engine, result: Result<(), SyncError>) -> Option<String> {
        store_publish(&self.store, engine);
        match result {
            Ok(()) => None,
            Err(SyncError::Validation(e)) => Some(e.to_string()),
            Err(SyncError::SessionRejected | SyncError::NotSignedIn) => {
                self.redirect();
                None
            }
            Err(e) => {
                alert(&e.to_string());
                None
            }
        }
    }

    /// Leave for the auth page. Returns whether this call started the
    /// redirect; repeats, and calls after the page is gone, do nothing.
    pub fn redirect(&self) -> bool {
        match self.signed_out.try_get_untracked() {
            Some(false) => self.set_signed_out.try_set(true).is_none(),
            _ => false,
        }
    }
}

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}
