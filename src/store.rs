//! Dashboard State Store
//!
//! Reactive mirror of the sync engine, using Leptos reactive_stores for
//! field-level reactivity. Only `store_publish` writes to it, so the view
//! always shows the engine's last server-derived list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::Engine;
use crate::models::Task;
use crate::sync::SyncState;

#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Last list fetched from the server
    pub tasks: Vec<Task>,
    pub sync_state: SyncState,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Replace the store contents with the engine's current view. A store
/// that has been disposed is left alone.
pub fn store_publish(store: &DashboardStore, engine: &Engine) {
    if let Some(mut tasks) = store.tasks().try_write() {
        *tasks = engine.tasks();
    }
    if let Some(mut sync_state) = store.sync_state().try_write() {
        *sync_state = engine.state();
    }
}

/// Mark a fetch as in flight
pub fn store_mark_loading(store: &DashboardStore) {
    *store.sync_state().write() = SyncState::Loading;
}
