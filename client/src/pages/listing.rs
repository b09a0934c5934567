//! Listing details at `/listing/:id`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page reads the public catalog and picks one listing by id. A view is
//! recorded once per visit; phone and Telegram buttons record a click
//! before leaving the page.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::image_lightbox::ImageLightbox;
use crate::components::map_view::{MapPoint, MapView};
use crate::net::api::{self, ClickKind};
use crate::net::types::Listing;
use crate::state::ui::UiState;
use crate::util::{browser, format, remote::spawn_remote};

/// Cover first, then the remaining gallery without duplicates.
pub(crate) fn gallery_images(listing: &Listing) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(listing.images.len() + 1);
    for url in listing.cover_image().into_iter().chain(listing.images.iter().map(String::as_str)) {
        if !url.is_empty() && !out.iter().any(|u| u == url) {
            out.push(url.to_owned());
        }
    }
    out
}

/// Metro lines: the station list, else the single legacy `metro` field.
pub(crate) fn metro_lines(listing: &Listing) -> Vec<String> {
    let stations: Vec<String> = listing
        .metro_stations
        .iter()
        .filter(|s| !s.station_name.trim().is_empty())
        .map(|s| {
            if s.walk_minutes > 0 {
                format!("{}, {}", s.station_name, format::walk_minutes(s.walk_minutes))
            } else {
                s.station_name.clone()
            }
        })
        .collect();
    if !stations.is_empty() {
        return stations;
    }
    match (listing.metro.as_deref().filter(|m| !m.is_empty()), listing.metro_walk) {
        (Some(name), Some(walk)) if walk > 0 => vec![format!("{name}, {}", format::walk_minutes(walk))],
        (Some(name), _) => vec![name.to_owned()],
        _ => Vec::new(),
    }
}

pub(crate) fn parking_line(listing: &Listing) -> Option<String> {
    if !listing.has_parking {
        return None;
    }
    let kind = listing.parking_type.clone().filter(|k| !k.is_empty()).unwrap_or_else(|| "Парковка".to_owned());
    Some(match listing.parking_price_per_hour.filter(|p| *p > 0) {
        Some(price) => format!("{kind}, {} / час", format::price(price)),
        None => kind,
    })
}

fn contact(listing_id: i64, kind: ClickKind, href: String) {
    leptos::task::spawn_local(async move {
        api::track_click(listing_id, kind).await;
        browser::open_href(&href);
    });
}

#[component]
fn ListingDetails(listing: Listing) -> impl IntoView {
    let lightbox = RwSignal::new(None::<usize>);
    let images = gallery_images(&listing);
    let metro = metro_lines(&listing);
    let parking = parking_line(&listing);
    let id = listing.id;
    let points = listing
        .coordinates()
        .map(|(lat, lng)| vec![MapPoint { lat, lng, title: listing.title.clone(), href: None }])
        .unwrap_or_default();
    let has_map = !points.is_empty();
    let phone = listing.phone.clone().filter(|p| !p.is_empty());
    let telegram = listing.telegram.clone().filter(|t| !t.is_empty());

    let gallery = images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            view! {
                <button class="gallery__item" on:click=move |_| lightbox.set(Some(index))>
                    <img src=src.clone() alt="" loading="lazy"/>
                </button>
            }
        })
        .collect_view();

    let rooms = listing
        .rooms
        .clone()
        .into_iter()
        .enumerate()
        .map(|(index, room)| {
            let cover = room.images.first().cloned();
            view! {
                <A href=format!("/listing/{id}/room/{index}") attr:class="room-tile">
                    {cover.map(|src| view! { <img class="room-tile__image" src=src alt=""/> })}
                    <div class="room-tile__body">
                        <strong>{room.kind.clone()}</strong>
                        <span>{format!("{} / час", format::price(room.price))}</span>
                        {(room.square_meters > 0).then(|| view! { <span class="muted">{format!("{} м²", room.square_meters)}</span> })}
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <article class="listing-page">
            <header class="listing-page__header">
                {listing.logo_url.clone().filter(|l| !l.is_empty()).map(|src| view! { <img class="listing-page__logo" src=src alt=""/> })}
                <div>
                    <h1>{listing.title.clone()}</h1>
                    <p class="muted">{format!("{} · {}, {}", listing.kind, listing.city, listing.district)}</p>
                    <p>{listing.address.clone()}</p>
                </div>
                <div class="listing-page__price">{format!("от {} / час", format::price(listing.min_price()))}</div>
            </header>

            <div class="gallery">{gallery}</div>
            <ImageLightbox images=images open=lightbox/>

            <div class="listing-page__contacts">
                {phone.map(|phone| {
                    let href = browser::tel_href(&phone);
                    view! {
                        <button class="btn btn--primary" on:click=move |_| contact(id, ClickKind::Phone, href.clone())>
                            {format!("Позвонить {phone}")}
                        </button>
                    }
                })}
                {telegram.map(|handle| {
                    let href = browser::telegram_href(&handle);
                    view! {
                        <button class="btn" on:click=move |_| contact(id, ClickKind::Telegram, href.clone())>
                            "Написать в Telegram"
                        </button>
                    }
                })}
            </div>

            {listing.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p class="listing-page__description">{d}</p> })}

            <section class="listing-page__section">
                <h2>"Номера"</h2>
                <div class="room-grid">{rooms}</div>
            </section>

            {(!listing.features.is_empty()).then(|| {
                view! {
                    <section class="listing-page__section">
                        <h2>"Удобства"</h2>
                        <ul class="chips">
                            {listing.features.iter().map(|f| view! { <li class="chip">{f.clone()}</li> }).collect_view()}
                        </ul>
                    </section>
                }
            })}

            <section class="listing-page__section">
                <h2>"Как добраться"</h2>
                <ul class="listing-page__facts">
                    {metro.into_iter().map(|line| view! { <li>{format!("Метро: {line}")}</li> }).collect_view()}
                    {parking.map(|line| view! { <li>{line}</li> })}
                </ul>
                {has_map.then(|| view! { <div class="listing-page__map"><MapView points=points zoom=15/></div> })}
            </section>
        </article>
    }
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let listing_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok())));
    let listing = RwSignal::new(None::<Listing>);
    let loaded = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = listing_id.get() else {
            loaded.set(true);
            return;
        };
        loaded.set(false);
        spawn_remote(
            ui,
            None,
            "Не удалось загрузить объект",
            async move {
                let result = api::public_listings().await;
                loaded.set(true);
                result
            },
            move |all| {
                let found = all.into_iter().find(|l| l.id == id);
                if found.is_some() {
                    leptos::task::spawn_local(api::track_view(id));
                }
                listing.set(found);
            },
        );
    });

    move || {
        if !loaded.get() {
            return view! { <p class="page-status">"Загрузка..."</p> }.into_any();
        }
        match listing.get() {
            Some(listing) => view! { <ListingDetails listing=listing/> }.into_any(),
            None => view! {
                <div class="not-found">
                    <h1>"Объект не найден"</h1>
                    <A href="/" attr:class="btn btn--primary">"К каталогу"</A>
                </div>
            }
            .into_any(),
        }
    }
}
