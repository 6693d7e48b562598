//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SyncFeedback;
use crate::context::use_app_context;

/// Input + Add button; keeps the text when the server refuses it
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let feedback = expect_context::<SyncFeedback>();

    let (task_title, set_task_title) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let title = task_title.get_untracked();
        let engine = ctx.engine();

        set_error.set(String::new());
        set_pending.set(true);
        spawn_local(async move {
            let result = engine.create(&title).await;
            let accepted = match &result {
                Ok(()) => true,
                Err(e) => e.after_mutation(),
            };
            if accepted {
                let _ = set_task_title.try_set(String::new());
            }
            if let Some(message) = feedback.settle(&engine, result) {
                let _ = set_error.try_set(message);
            }
            let _ = set_pending.try_set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Enter a new task"
                    prop:value=move || task_title.get()
                    on:input=move |ev| set_task_title.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || pending.get()>"Add Task"</button>
            </div>
            {move || {
                let message = error.get();
                (!message.is_empty()).then(|| view! { <p class="error">{message}</p> })
            }}
        </form>
    }
}
