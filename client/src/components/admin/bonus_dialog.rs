//! Bonus credit dialog with preset amounts.

use leptos::prelude::*;

use crate::net::types::Owner;
use crate::state::owners::{BONUS_PRESETS, parse_bonus_amount};
use crate::util::format;

#[component]
pub fn BonusDialog(owner: Owner, on_submit: Callback<i64>, on_close: Callback<()>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || match parse_bonus_amount(&amount.get_untracked()) {
        Ok(value) => on_submit.run(value),
        Err(message) => error.set(Some(message)),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Начислить бонус"</h2>
                <p class="dialog__subtitle">
                    {format!("{} · бонусов сейчас {}", owner.full_name, format::balance(owner.bonus_balance))}
                </p>
                <div class="chips">
                    {BONUS_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    class="chip"
                                    on:click=move |_| {
                                        amount.set(preset.to_string());
                                        error.set(None);
                                    }
                                >
                                    {format::price(preset)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <label class="field">
                    <span class="field__label">"Сумма, ₽"</span>
                    <input
                        class="field__input"
                        type="number"
                        min="1"
                        prop:value=move || amount.get()
                        on:input=move |ev| {
                            amount.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="field__error">{message}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button class="btn btn--primary" on:click=move |_| submit()>"Начислить"</button>
                </div>
            </div>
        </div>
    }
}
