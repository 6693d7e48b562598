//! Task Row Component
//!
//! One task in the dashboard list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SyncFeedback;
use crate::context::use_app_context;
use crate::models::Task;

/// Completion state the row's checkbox should show, from the synced list
fn displayed_completion(tasks: &[Task], id: &str, fallback: bool) -> bool {
    tasks
        .iter()
        .find(|task| task.id == id)
        .map_or(fallback, |task| task.is_completed)
}

#[component]
pub fn TaskRow(
    task: Task,
    set_editing: WriteSignal<Option<Task>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let feedback = expect_context::<SyncFeedback>();

    let completed = task.is_completed;
    let title = task.title.clone();

    // A keyed row is not re-rendered when a failed toggle leaves the list
    // unchanged, so the box the browser already flipped is set back by hand.
    let toggle_id = task.id.clone();
    let on_toggle = move |ev: web_sys::Event| {
        let checkbox = event_target::<web_sys::HtmlInputElement>(&ev);
        let id = toggle_id.clone();
        let engine = ctx.engine();
        spawn_local(async move {
            let result = engine.toggle(&id, completed).await;
            feedback.settle(&engine, result);
            checkbox.set_checked(displayed_completion(&engine.tasks(), &id, completed));
        });
    };

    let delete_id = task.id.clone();
    let on_delete = move |_| {
        let id = delete_id.clone();
        let engine = ctx.engine();
        spawn_local(async move {
            let result = engine.delete(&id).await;
            feedback.settle(&engine, result);
        });
    };

    let on_edit = move |_| set_editing.set(Some(task.clone()));

    view! {
        <li class="task-row">
            <label class="task-main">
                <input type="checkbox" prop:checked=completed on:change=on_toggle />
                <span class=if completed { "task-title completed" } else { "task-title" }>{title}</span>
            </label>
            <div class="task-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::api::FakeApi;
    use crate::error::{ApiError, SyncError};
    use crate::session::MemorySession;
    use crate::sync::{TaskSyncEngine, TOGGLE_FAILED};

    fn signed_in(api: FakeApi) -> TaskSyncEngine<FakeApi, MemorySession> {
        api.issue_token("tok");
        TaskSyncEngine::new(Rc::new(api), Rc::new(MemorySession::with_token("tok")))
    }

    #[tokio::test]
    async fn test_failed_toggle_shows_server_state() {
        let api = FakeApi::new();
        let id = api.seed("Write report", false);
        let engine = signed_in(api);
        engine.list().await.unwrap();

        engine.api().fail_next(ApiError::Rejected { status: 500, message: None });
        assert_eq!(engine.toggle(&id, false).await, Err(SyncError::Failed(TOGGLE_FAILED)));

        assert!(!displayed_completion(&engine.tasks(), &id, false));
    }

    #[tokio::test]
    async fn test_successful_toggle_shows_new_state() {
        let api = FakeApi::new();
        let id = api.seed("Write report", false);
        let engine = signed_in(api);
        engine.list().await.unwrap();

        engine.toggle(&id, false).await.unwrap();

        assert!(displayed_completion(&engine.tasks(), &id, false));
    }

    #[test]
    fn test_missing_task_keeps_fallback() {
        assert!(displayed_completion(&[], "gone", true));
        assert!(!displayed_completion(&[], "gone", false));
    }
}
