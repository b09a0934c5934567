//! Fire-and-report wrapper for remote calls made from event handlers.
//!
//! DESIGN
//! ======
//! Every page reacts to a failed call the same way: log it, show an error
//! toast, release the busy flag. Success handling stays with the caller.

use std::future::Future;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Run `request` on the local executor. `busy` is raised for its duration;
/// failures become an error toast titled `failure`.
pub fn spawn_remote<T, Fut, F>(ui: RwSignal<UiState>, busy: Option<RwSignal<bool>>, failure: &'static str, request: Fut, on_ok: F)
where
    T: 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
    F: FnOnce(T) + 'static,
{
    if let Some(flag) = busy {
        flag.set(true);
    }
    leptos::task::spawn_local(async move {
        let outcome = request.await;
        if let Some(flag) = busy {
            flag.set(false);
        }
        match outcome {
            Ok(value) => on_ok(value),
            Err(e) => {
                log::warn!("{failure}: {e}");
                ui.update(|u| {
                    u.error(failure, e);
                });
            }
        }
    });
}
