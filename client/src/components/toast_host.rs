//! Toast notification stack.
//!
//! DESIGN
//! ======
//! Each toast owns a dismiss timer. The timer task checks an alive flag so
//! a toast closed by hand (or evicted by the queue cap) never touches the
//! signal after its view is gone.

use leptos::prelude::*;

use crate::state::ui::{Toast, UiState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(5);

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || ui.get().toasts key=|toast| toast.id let:toast>
                <ToastItem toast=toast/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                ui.update(|u| u.dismiss(id));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let Toast { title, body, tone, .. } = toast;
    view! {
        <div class=tone.class() role="status">
            <div class="toast__text">
                <strong class="toast__title">{title}</strong>
                {(!body.is_empty()).then(|| view! { <p class="toast__body">{body}</p> })}
            </div>
            <button class="toast__close" title="Закрыть" on:click=move |_| ui.update(|u| u.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
