//! Manual subscription grant with 30/90/365-day shortcuts.

use leptos::prelude::*;

use crate::net::types::Listing;
use crate::state::admin_listings::{SUBSCRIPTION_SHORTCUTS, parse_days};
use crate::util::{format, subscription};

#[component]
pub fn SubscriptionDialog(listing: Listing, on_submit: Callback<i64>, on_close: Callback<()>) -> impl IntoView {
    let days = RwSignal::new(SUBSCRIPTION_SHORTCUTS[0].to_string());
    let error = RwSignal::new(None::<&'static str>);
    let status = subscription::subscription_status(listing.subscription_expires_at.as_deref(), subscription::now());
    let current = listing
        .subscription_expires_at
        .as_deref()
        .map_or_else(|| "нет".to_owned(), format::date);

    let submit = move || match parse_days(&days.get_untracked()) {
        Ok(value) => on_submit.run(value),
        Err(message) => error.set(Some(message)),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Подписка"</h2>
                <p class="dialog__subtitle">{listing.title.clone()}</p>
                <p>
                    "Сейчас: " <span class=status.tone.badge_class()>{status.text.clone()}</span>
                    {format!(" · до {current}")}
                </p>
                <div class="chips">
                    {SUBSCRIPTION_SHORTCUTS
                        .into_iter()
                        .map(|value| {
                            let label = format!("{value} {}", format::plural(value, "день", "дня", "дней"));
                            view! {
                                <button
                                    class="chip"
                                    class=("chip--active", move || days.get() == value.to_string())
                                    on:click=move |_| {
                                        days.set(value.to_string());
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
                    <span class="field__label">"Дней от сегодня"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        prop:value=move || days.get()
                        on:input=move |ev| {
                            days.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="field__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button class="btn btn--primary" on:click=move |_| submit()>"Установить"</button>
                </div>
            </div>
        </div>
    }
}
