//! Edit Task Modal Component
//!
//! Holds the "currently editing" task. Stays open on validation or
//! server errors; Cancel closes it without a request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SyncFeedback;
use crate::context::use_app_context;
use crate::models::Task;

#[component]
pub fn EditTaskModal(
    editing: ReadSignal<Option<Task>>,
    set_editing: WriteSignal<Option<Task>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let feedback = expect_context::<SyncFeedback>();

    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal(String::new());

    // Seed the draft each time a task is opened
    Effect::new(move |_| {
        if let Some(task) = editing.get() {
            set_draft.set(task.title);
            set_error.set(String::new());
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(task) = editing.get_untracked() else {
            return;
        };
        let title = draft.get_untracked();
        let engine = ctx.engine();

        spawn_local(async move {
            let result = engine.update(&task.id, &title).await;
            let accepted = match &result {
                Ok(()) => true,
                Err(e) => e.after_mutation(),
            };
            if accepted {
                let _ = set_editing.try_set(None);
            }
            if let Some(message) = feedback.settle(&engine, result) {
                let _ = set_error.try_set(message);
            }
        });
    };

    move || editing.get().is_some().then(|| view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=save>
                <h2>"Edit Task"</h2>
                <input
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! { <p class="error">{message}</p> })
                }}
                <div class="modal-actions">
                    <button type="submit" class="primary-btn">"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(None)>"Cancel"</button>
                </div>
            </form>
        </div>
    })
}
