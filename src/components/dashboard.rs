//! Dashboard Page Component
//!
//! Task list with create, toggle, edit and delete controls. All data
//! operations go through the sync engine; this page only renders the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{EditTaskModal, NewTaskForm, SyncFeedback, TaskRow};
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{store_mark_loading, store_publish, use_dashboard_store, DashboardStateStoreFields};
use crate::sync::SyncState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let navigate = use_navigate();

    let (signed_out, set_signed_out) = signal(false);
    let (editing, set_editing) = signal::<Option<Task>>(None);

    let feedback = SyncFeedback::new(store, (signed_out, set_signed_out));
    provide_context(feedback);

    Effect::new(move |_| {
        if signed_out.get() {
            navigate("/", Default::default());
        }
    });

    // Initial load, or straight back to the auth page without a token
    Effect::new(move |_| {
        let engine = ctx.engine();
        if !engine.is_signed_in() {
            engine.logout();
            store_publish(&store, &engine);
            feedback.redirect();
            return;
        }
        store_mark_loading(&store);
        spawn_local(async move {
            let result = engine.list().await;
            feedback.settle(&engine, result);
        });
    });

    let logout = move |_| {
        let engine = ctx.engine();
        engine.logout();
        store_publish(&store, &engine);
        feedback.redirect();
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Task Dashboard"</h1>
                <button class="logout-btn" on:click=logout>"Logout"</button>
            </header>

            <NewTaskForm />

            {move || (store.sync_state().get() == SyncState::Loading).then(|| view! {
                <p class="loading">"Loading tasks..."</p>
            })}

            <ul class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=|task| (task.id.clone(), task.title.clone(), task.is_completed)
                    children=move |task| view! { <TaskRow task=task set_editing=set_editing /> }
                />
            </ul>

            {move || (store.tasks().read().is_empty() && store.sync_state().get() == SyncState::Ready).then(|| view! {
                <p class="empty-state">"No tasks available."</p>
            })}

            <EditTaskModal editing=editing set_editing=set_editing />
        </div>
    }
}
