//! Task-Dash Frontend App
//!
//! Wires the sync engine into context and routes between the auth page
//! and the dashboard.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{AuthPage, DashboardPage};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::session::LocalSession;
use crate::store::DashboardState;
use crate::sync::TaskSyncEngine;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("task API at {}", config.base_url);

    let session = LocalSession::new(config.token_key.clone());
    let engine = TaskSyncEngine::new(Rc::new(HttpApi::new(config)), Rc::new(session));

    // Provide context to all children
    provide_context(AppContext::new(engine));
    provide_context(Store::new(DashboardState::default()));

    view! {
        <Router>
            <Routes fallback=|| view! { <AuthPage/> }>
                <Route path=path!("/") view=AuthPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
