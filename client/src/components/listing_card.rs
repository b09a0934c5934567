//! Catalog card for one listing.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Listing;
use crate::state::catalog::is_top;
use crate::util::format;

#[component]
pub fn ListingCard(listing: Listing) -> impl IntoView {
    let href = format!("/listing/{}", listing.id);
    let cover = listing.cover_image().map(str::to_owned);
    let top = is_top(&listing);
    let expert = listing.has_expert_rating();
    let price = format!("от {}", format::price(listing.min_price()));
    let metro = listing.metro.clone().filter(|m| !m.is_empty()).map(|station| match listing.metro_walk {
        Some(minutes) if minutes > 0 => format!("м. {station}, {}", format::walk_minutes(minutes)),
        _ => format!("м. {station}"),
    });
    let rooms = listing.rooms.len();
    let rooms_label = (rooms > 0).then(|| {
        let count = i64::try_from(rooms).unwrap_or(i64::MAX);
        format!("{rooms} {}", format::plural(count, "номер", "номера", "номеров"))
    });
    let location = if listing.district.is_empty() {
        listing.city.clone()
    } else {
        format!("{}, {}", listing.city, listing.district)
    };

    view! {
        <A href=href attr:class="listing-card">
            <div class="listing-card__media">
                {match cover {
                    Some(src) => view! { <img class="listing-card__image" src=src alt=listing.title.clone() loading="lazy"/> }.into_any(),
                    None => view! { <div class="listing-card__image listing-card__image--empty">"Нет фото"</div> }.into_any(),
                }}
                <div class="listing-card__badges">
                    {top.then(|| view! { <span class="badge badge--top">"TOP"</span> })}
                    {expert.then(|| view! { <span class="badge badge--expert">"Оценка эксперта"</span> })}
                </div>
            </div>
            <div class="listing-card__body">
                <h3 class="listing-card__title">{listing.title.clone()}</h3>
                <p class="listing-card__location">{location}</p>
                {metro.map(|m| view! { <p class="listing-card__metro">{m}</p> })}
                <div class="listing-card__footer">
                    <span class="listing-card__price">{price}</span>
                    {rooms_label.map(|r| view! { <span class="listing-card__rooms">{r}</span> })}
                    {listing.has_parking.then(|| view! { <span class="listing-card__parking">"P"</span> })}
                </div>
            </div>
        </A>
    }
}
