//! Full-screen photo viewer with keyboard navigation.

#[cfg(test)]
#[path = "image_lightbox_test.rs"]
mod image_lightbox_test;

use leptos::prelude::*;

/// Index reached by moving `delta` from `index`, wrapping at both ends.
#[must_use]
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_signed = isize::try_from(len).unwrap_or(isize::MAX);
    let current = isize::try_from(index % len).unwrap_or(0);
    usize::try_from((current + delta).rem_euclid(len_signed)).unwrap_or(0)
}

/// Lightbox over `images`. `open` holds the shown index; `None` hides it.
///
/// Arrow keys move between photos and Escape closes. The window listener
/// is removed when the lightbox unmounts.
#[component]
pub fn ImageLightbox(images: Vec<String>, open: RwSignal<Option<usize>>) -> impl IntoView {
    let images = StoredValue::new(images);
    let len = images.with_value(Vec::len);

    let move_by = move |delta: isize| open.update(|slot| *slot = slot.map(|i| step(i, len, delta)));

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if open.get_untracked().is_none() {
            return;
        }
        match ev.key().as_str() {
            "ArrowLeft" => move_by(-1),
            "ArrowRight" => move_by(1),
            "Escape" => open.set(None),
            _ => return,
        }
        ev.prevent_default();
    });
    on_cleanup(move || handle.remove());

    let current_src = move || open.get().and_then(|i| images.with_value(|list| list.get(i).cloned()));

    view! {
        <Show when=move || open.get().is_some()>
            <div class="lightbox" on:click=move |_| open.set(None)>
                <button
                    class="lightbox__nav lightbox__nav--prev"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        move_by(-1);
                    }
                >
                    "‹"
                </button>
                <img
                    class="lightbox__image"
                    src=move || current_src().unwrap_or_default()
                    alt="Фото"
                    on:click=move |ev| ev.stop_propagation()
                />
                <button
                    class="lightbox__nav lightbox__nav--next"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        move_by(1);
                    }
                >
                    "›"
                </button>
                <span class="lightbox__counter">
                    {move || open.get().map(|i| format!("{} / {len}", i + 1)).unwrap_or_default()}
                </span>
                <button class="lightbox__close" title="Закрыть" on:click=move |_| open.set(None)>
                    "×"
                </button>
            </div>
        </Show>
    }
}
