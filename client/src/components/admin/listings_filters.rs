//! City chips, type select, and toggles for the admin listings tab.

use leptos::prelude::*;

use crate::state::admin_listings::{ALL, AdminListingsState};

#[component]
pub fn ListingsFilters(state: RwSignal<AdminListingsState>) -> impl IntoView {
    let selected_city = move || state.with(|s| s.filters.city.clone());
    let total = move || state.with(|s| s.city_totals().values().sum::<usize>());

    view! {
        <div class="admin-filters">
            <div class="chips">
                <button
                    class="chip"
                    class=("chip--active", move || selected_city() == ALL)
                    on:click=move |_| state.update(|s| s.filters.city = ALL.to_owned())
                >
                    {move || format!("Все ({})", total())}
                </button>
                {move || {
                    state
                        .with(AdminListingsState::city_totals)
                        .into_iter()
                        .map(|(city, count)| {
                            let label = if city.is_empty() { "Без города".to_owned() } else { city.clone() };
                            let value = city.clone();
                            view! {
                                <button
                                    class="chip"
                                    class=("chip--active", move || selected_city() == city)
                                    on:click=move |_| state.update(|s| s.filters.city = value.clone())
                                >
                                    {format!("{label} ({count})")}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="admin-filters__row">
                <select
                    class="select"
                    prop:value=move || state.with(|s| s.filters.kind.clone())
                    on:change=move |ev| state.update(|s| s.filters.kind = event_target_value(&ev))
                >
                    <option value=ALL>"Все типы"</option>
                    {move || {
                        state
                            .with(AdminListingsState::kinds)
                            .into_iter()
                            .map(|kind| view! { <option value=kind.clone()>{kind.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.filters.show_archived)
                        on:change=move |ev| state.update(|s| s.filters.show_archived = event_target_checked(&ev))
                    />
                    "Неактивные и архив"
                </label>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.filters.only_unrated)
                        on:change=move |ev| state.update(|s| s.filters.only_unrated = event_target_checked(&ev))
                    />
                    "Без оценки эксперта"
                </label>
            </div>
        </div>
    }
}
