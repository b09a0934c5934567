//! Moderation decision dialog.

use leptos::prelude::*;

use crate::net::types::{Listing, ModerationStatus};
use crate::state::admin_listings::validate_moderation;

const DECISIONS: [(ModerationStatus, &str); 3] = [
    (ModerationStatus::Approved, "Одобрить"),
    (ModerationStatus::NeedsChanges, "Нужны правки"),
    (ModerationStatus::Rejected, "Отклонить"),
];

#[component]
pub fn ModerationDialog(
    listing: Listing,
    on_submit: Callback<(ModerationStatus, String)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let status = RwSignal::new(ModerationStatus::Approved);
    let comment = RwSignal::new(listing.moderation_comment.clone().unwrap_or_default());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        let chosen = status.get_untracked();
        let text = comment.get_untracked();
        match validate_moderation(&chosen, &text) {
            Ok(()) => on_submit.run((chosen, text.trim().to_owned())),
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        on_close.run(());
                    }
                }
                tabindex="0"
            >
                <h2>"Модерация"</h2>
                <p class="dialog__subtitle">{listing.title.clone()}</p>
                <div class="segmented">
                    {DECISIONS
                        .into_iter()
                        .map(|(value, label)| {
                            let selected = value.clone();
                            view! {
                                <button
                                    class="segmented__item"
                                    class=("segmented__item--active", move || status.get() == selected)
                                    on:click=move |_| {
                                        status.set(value.clone());
                                        error.set(None);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class="field">
                    <span class="field__label">"Комментарий для владельца"</span>
                    <textarea
                        class="field__input"
                        rows="4"
                        prop:value=move || comment.get()
                        on:input=move |ev| {
                            comment.set(event_target_value(&ev));
                            error.set(None);
                        }
                    ></textarea>
                </label>
                {move || error.get().map(|message| view! { <p class="field__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button class="btn btn--primary" on:click=move |_| submit()>"Сохранить"</button>
                </div>
            </div>
        </div>
    }
}
