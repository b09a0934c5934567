//! City landing page at `/city/:city`: the catalog locked to one city.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::home::load_catalog;
use super::not_found::NotFoundPage;
use crate::components::listings_view::ListingsView;
use crate::components::search_hero::SearchHero;
use crate::state::catalog::{CatalogState, CityInfo, city_by_slug};
use crate::state::ui::UiState;

#[component]
fn CityCatalog(info: &'static CityInfo) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let catalog = RwSignal::new(CatalogState { city: info.name.to_owned(), ..CatalogState::default() });

    Effect::new(move || load_catalog(catalog, ui));

    view! {
        <div class="city-page">
            <SearchHero catalog=catalog lock_city=true/>
            <section class="city-page__intro">
                <p class="city-page__region">{info.region}</p>
                <p class="city-page__description">{info.description}</p>
                <ul class="city-page__highlights">
                    {info.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
            </section>
            <ListingsView catalog=catalog/>
        </div>
    }
}

#[component]
pub fn CityPage() -> impl IntoView {
    let params = use_params_map();
    let info = Memo::new(move |_| params.with(|p| p.get("city").and_then(|slug| city_by_slug(&slug))));

    move || match info.get() {
        Some(info) => view! { <CityCatalog info=info/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}
