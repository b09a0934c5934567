//! Ticking "time left" label for a subscription.

use leptos::prelude::*;

use crate::util::subscription::{countdown, now, parse_timestamp};

/// Re-renders once per second until unmounted.
#[component]
pub fn LiveCountdown(#[prop(into)] expires_at: String) -> impl IntoView {
    let current = RwSignal::new(now());
    let expires = parse_timestamp(&expires_at);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                current.set(now());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <span class="live-countdown">
            {move || expires.map_or_else(|| "—".to_owned(), |at| countdown(at, current.get()))}
        </span>
    }
}
