//! Modal that links unowned listings to an owner.

use leptos::prelude::*;

use crate::net::types::Listing;
use crate::state::owners::{ALL_CITIES, AssignState};

/// Lists every listing; already owned ones are shown but not selectable.
/// `on_submit` receives the selected listing ids.
#[component]
pub fn AssignListingsModal(
    state: RwSignal<Option<AssignState>>,
    on_submit: Callback<Vec<i64>>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let selected_count = move || state.with(|s| s.as_ref().map_or(0, |a| a.selected.len()));
    let city = move || state.with(|s| s.as_ref().map(|a| a.city.clone()).unwrap_or_default());

    let submit = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.as_ref().map(|a| a.selected.iter().copied().collect()).unwrap_or_default());
        if !ids.is_empty() {
            on_submit.run(ids);
        }
    };

    let row = move |listing: Listing| {
        let id = listing.id;
        let owned = listing.owner_id.is_some();
        let owner_note = listing.owner_name.clone().map(|n| format!(" · владелец: {n}"));
        view! {
            <label class="assign-row" class=("assign-row--disabled", owned)>
                <input
                    type="checkbox"
                    disabled=owned
                    prop:checked=move || state.with(|s| s.as_ref().is_some_and(|a| a.selected.contains(&id)))
                    on:change=move |_| state.update(|s| {
                        if let Some(a) = s.as_mut() {
                            a.toggle(id);
                        }
                    })
                />
                <span class="assign-row__title">{listing.title.clone()}</span>
                <span class="assign-row__meta">
                    {format!("{}, {}", listing.city, listing.district)}
                    {owner_note}
                </span>
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Привязать объекты"</h2>
                <input
                    class="field__input"
                    type="search"
                    placeholder="Поиск по названию, городу, району"
                    prop:value=move || state.with(|s| s.as_ref().map(|a| a.query.clone()).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            if let Some(a) = s.as_mut() {
                                a.query = value;
                            }
                        });
                    }
                />
                <div class="chips">
                    <button
                        class="chip"
                        class=("chip--active", move || city() == ALL_CITIES)
                        on:click=move |_| state.update(|s| {
                            if let Some(a) = s.as_mut() {
                                a.city = ALL_CITIES.to_owned();
                            }
                        })
                    >
                        "Все города"
                    </button>
                    {move || {
                        state
                            .with(|s| s.as_ref().map(AssignState::city_counts).unwrap_or_default())
                            .into_iter()
                            .map(|(name, count)| {
                                let active = name.clone();
                                let value = name.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class=("chip--active", move || city() == active)
                                        on:click=move |_| {
                                            let value = value.clone();
                                            state.update(|s| {
                                                if let Some(a) = s.as_mut() {
                                                    a.city = value;
                                                }
                                            });
                                        }
                                    >
                                        {format!("{name} ({count})")}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.as_ref().is_some_and(AssignState::all_selected))
                        on:change=move |_| state.update(|s| {
                            if let Some(a) = s.as_mut() {
                                a.toggle_all();
                            }
                        })
                    />
                    "Выбрать все свободные"
                </label>
                <div class="assign-list">
                    {move || {
                        state
                            .with(|s| {
                                s.as_ref()
                                    .map(|a| a.filtered().into_iter().cloned().collect::<Vec<_>>())
                                    .unwrap_or_default()
                            })
                            .into_iter()
                            .map(row)
                            .collect_view()
                    }}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Отмена"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get() || selected_count() == 0
                        on:click=move |_| submit()
                    >
                        {move || format!("Привязать ({})", selected_count())}
                    </button>
                </div>
            </div>
        </div>
    }
}
