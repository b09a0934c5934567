//! Search hero with query, city, and type filters for the catalog.

use leptos::prelude::*;

use crate::state::catalog::{ALL_TYPES, CatalogState};
use crate::state::wizard::LISTING_TYPES;

#[component]
pub fn SearchHero(catalog: RwSignal<CatalogState>, #[prop(optional)] lock_city: bool) -> impl IntoView {
    let heading = move || {
        let city = catalog.with(|c| c.city.clone());
        if lock_city {
            format!("Отели на час в городе {city}")
        } else {
            "Почасовая аренда номеров".to_owned()
        }
    };

    view! {
        <section class="search-hero">
            <h1 class="search-hero__title">{heading}</h1>
            <p class="search-hero__subtitle">"Бронируйте номер от 2 часов без переплат"</p>
            <div class="search-hero__controls">
                <input
                    class="search-hero__input"
                    type="search"
                    placeholder="Название, город или район"
                    prop:value=move || catalog.with(|c| c.query.clone())
                    on:input=move |ev| catalog.update(|c| c.set_query(event_target_value(&ev)))
                />
                <Show when=move || !lock_city>
                    <select
                        class="search-hero__select"
                        prop:value=move || catalog.with(|c| c.city.clone())
                        on:change=move |ev| catalog.update(|c| c.set_city(event_target_value(&ev)))
                    >
                        {move || {
                            catalog
                                .with(CatalogState::city_options)
                                .into_iter()
                                .map(|city| view! { <option value=city.clone()>{city.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </Show>
                <select
                    class="search-hero__select"
                    prop:value=move || catalog.with(|c| c.kind.clone())
                    on:change=move |ev| catalog.update(|c| c.set_kind(event_target_value(&ev)))
                >
                    <option value=ALL_TYPES>"Все типы"</option>
                    {LISTING_TYPES.iter().map(|kind| view! { <option value=*kind>{*kind}</option> }).collect_view()}
                </select>
            </div>
        </section>
    }
}
