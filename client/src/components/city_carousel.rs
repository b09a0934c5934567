//! Horizontal strip of city landing links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::catalog::CITIES;

#[component]
pub fn CityCarousel() -> impl IntoView {
    view! {
        <section class="city-carousel">
            <h2 class="section-title">"Популярные города"</h2>
            <div class="city-carousel__track">
                {CITIES
                    .iter()
                    .map(|city| {
                        view! {
                            <A href=format!("/city/{}", city.slug) attr:class="city-carousel__item">
                                <span class="city-carousel__name">{city.name}</span>
                                <span class="city-carousel__hint">{city.highlights[0]}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
