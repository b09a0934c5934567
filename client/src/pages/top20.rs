//! TOP-20 premium placements per city at `/top20?city=`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::live_countdown::LiveCountdown;
use crate::net::api;
use crate::state::top20::{TOP20_CITIES, Top20Entry, Top20State, booked_entries, city_from_query};
use crate::state::ui::UiState;
use crate::util::{format, remote::spawn_remote};

#[component]
fn Top20Card(entry: Top20Entry) -> impl IntoView {
    let Top20Entry { position, booking } = entry;
    let href = format!("/listing/{}", booking.listing_id);
    let metro = booking.metro.clone().filter(|m| !m.is_empty()).map(|m| match booking.metro_walk {
        Some(walk) if walk > 0 => format!("{m}, {}", format::walk_minutes(walk)),
        _ => m,
    });

    view! {
        <A href=href attr:class="top20-card">
            <span class="top20-card__position">{format!("#{position}")}</span>
            {booking.image_url.clone().filter(|u| !u.is_empty()).map(|src| view! { <img class="top20-card__image" src=src alt=""/> })}
            <div class="top20-card__body">
                <h3>{booking.listing_title.clone()}</h3>
                <p class="muted">{format!("{} · {}", booking.kind, booking.district)}</p>
                <p>{format!("от {} / час", format::price(booking.price))}</p>
                {metro.map(|line| view! { <p class="muted">{line}</p> })}
                {booking.has_parking.then(|| view! { <p class="muted">"Парковка"</p> })}
                {booking.expires_at.clone().map(|at| view! { <LiveCountdown expires_at=at/> })}
            </div>
        </A>
    }
}

#[component]
pub fn Top20Page() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let state = RwSignal::new(Top20State::default());

    Effect::new(move || {
        let city = query.with(|q| city_from_query(q.get("city").as_deref())).unwrap_or(TOP20_CITIES[0]);
        state.update(|s| {
            s.select_city(city);
            s.loading = true;
        });
        spawn_remote(
            ui,
            None,
            "Не удалось загрузить TOP-20",
            async move {
                let result = api::top20_positions(city).await;
                state.update(|s| s.loading = false);
                result
            },
            move |response| {
                state.update(|s| {
                    if s.city == city {
                        s.entries = booked_entries(response.positions);
                    }
                });
            },
        );
    });

    let select = move |city: &'static str| {
        let encoded: String = url::form_urlencoded::byte_serialize(city.as_bytes()).collect();
        navigate(&format!("/top20?city={encoded}"), NavigateOptions::default());
    };

    view! {
        <div class="top20-page">
            <h1>"TOP-20 отелей"</h1>
            <p class="muted">"Лучшие места в выдаче по городам"</p>
            <div class="segmented top20-page__cities">
                {TOP20_CITIES
                    .into_iter()
                    .map(|city| {
                        let select = select.clone();
                        view! {
                            <button
                                class="segmented__item"
                                class=("segmented__item--active", move || state.with(|s| s.city == city))
                                on:click=move |_| select(city)
                            >
                                {city}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="page-status">"Загрузка..."</p> }
            >
                {move || {
                    let entries = state.with(|s| s.entries.clone());
                    if entries.is_empty() {
                        view! { <p class="page-status">"В этом городе пока нет объектов в TOP-20"</p> }.into_any()
                    } else {
                        view! {
                            <div class="top20-grid">
                                {entries.into_iter().map(|entry| view! { <Top20Card entry=entry/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
