//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::session::LocalSession;
use crate::sync::TaskSyncEngine;

/// The engine as wired in the browser
pub type Engine = TaskSyncEngine<HttpApi, LocalSession>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single-threaded engine, kept in local (non-Send) reactive storage
    engine: StoredValue<Rc<Engine>, LocalStorage>,
}

impl AppContext {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: StoredValue::new_local(Rc::new(engine)),
        }
    }

    /// Shared engine handle, cheap to move into `spawn_local` blocks
    pub fn engine(&self) -> Rc<Engine> {
        self.engine.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
