//! Catalog position editor.

use leptos::prelude::*;

use crate::net::types::{Listing, UNPLACED_POSITION};
use crate::state::admin_listings::parse_position;

#[component]
pub fn PositionDialog(listing: Listing, on_submit: Callback<i64>, on_close: Callback<()>) -> impl IntoView {
    let initial = if listing.auction >= UNPLACED_POSITION { String::new() } else { listing.auction.to_string() };
    let position = RwSignal::new(initial);
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || match parse_position(&position.get_untracked()) {
        Ok(value) => on_submit.run(value),
        Err(message) => error.set(Some(message)),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Позиция в каталоге"</h2>
                <p class="dialog__subtitle">{listing.title.clone()}</p>
                <label class="field">
                    <span class="field__label">"Позиция (1 — первая)"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        max="999"
                        prop:value=move || position.get()
                        on:input=move |ev| {
                            position.set(event_target_value(&ev));
                            error.set(None);
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
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
