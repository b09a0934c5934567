//! Home catalog: search, city links, and every public listing.

use leptos::prelude::*;

use crate::components::city_carousel::CityCarousel;
use crate::components::listings_view::ListingsView;
use crate::components::search_hero::SearchHero;
use crate::net::api;
use crate::state::catalog::CatalogState;
use crate::state::ui::UiState;
use crate::util::remote::spawn_remote;

/// Fetch the public catalog into `catalog`, toggling its loading flag.
pub(crate) fn load_catalog(catalog: RwSignal<CatalogState>, ui: RwSignal<UiState>) {
    catalog.update(|c| c.loading = true);
    spawn_remote(
        ui,
        None,
        "Не удалось загрузить объекты",
        async move {
            let result = api::public_listings().await;
            catalog.update(|c| c.loading = false);
            result
        },
        move |listings| catalog.update(|c| c.listings = listings),
    );
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let catalog = RwSignal::new(CatalogState::default());

    Effect::new(move || load_catalog(catalog, ui));

    view! {
        <div class="home-page">
            <SearchHero catalog=catalog/>
            <CityCarousel/>
            <ListingsView catalog=catalog/>
        </div>
    }
}
