//! Room details at `/listing/:id/room/:index`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::image_lightbox::ImageLightbox;
use crate::net::api;
use crate::net::types::Room;
use crate::state::ui::UiState;
use crate::util::{format, remote::spawn_remote};

#[component]
fn RoomView(listing_id: i64, room: Room) -> impl IntoView {
    let lightbox = RwSignal::new(None::<usize>);
    let gallery = room
        .images
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
    let min_hours = room.min_hours.unwrap_or(1).max(1);
    let ratings = room.has_expert_rating().then(|| {
        format!(
            "Фото: {:.1} / 10 · Наполненность: {:.1} / 10",
            room.expert_photo_rating.unwrap_or_default(),
            room.expert_fullness_rating.unwrap_or_default(),
        )
    });

    view! {
        <article class="room-page">
            <A href=format!("/listing/{listing_id}") attr:class="room-page__back">"← К объекту"</A>
            <h1>{room.kind.clone()}</h1>
            <div class="gallery">{gallery}</div>
            <ImageLightbox images=room.images.clone() open=lightbox/>
            <ul class="room-page__facts">
                <li>{format!("{} / час", format::price(room.price))}</li>
                <li>{format!("Минимум {min_hours} {}", format::plural(min_hours, "час", "часа", "часов"))}</li>
                {(room.square_meters > 0).then(|| view! { <li>{format!("{} м²", room.square_meters)}</li> })}
                {ratings.map(|line| view! { <li class="room-page__rating">{line}</li> })}
            </ul>
            {(!room.description.is_empty()).then(|| view! { <p class="room-page__description">{room.description.clone()}</p> })}
            {(!room.features.is_empty()).then(|| {
                view! {
                    <section class="listing-page__section">
                        <h2>"В номере"</h2>
                        <ul class="chips">
                            {room.features.iter().map(|f| view! { <li class="chip">{f.clone()}</li> }).collect_view()}
                        </ul>
                    </section>
                }
            })}
            {room.payment_methods.clone().filter(|p| !p.is_empty()).map(|p| view! {
                <p><strong>"Оплата: "</strong>{p}</p>
            })}
            {room.cancellation_policy.clone().filter(|c| !c.is_empty()).map(|c| view! {
                <p><strong>"Отмена: "</strong>{c}</p>
            })}
        </article>
    }
}

#[component]
pub fn RoomDetailsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let target = Memo::new(move |_| {
        params.with(|p| {
            let id = p.get("id")?.parse::<i64>().ok()?;
            let index = p.get("index")?.parse::<usize>().ok()?;
            Some((id, index))
        })
    });
    let room = RwSignal::new(None::<(i64, Room)>);
    let loaded = RwSignal::new(false);

    Effect::new(move || {
        let Some((id, index)) = target.get() else {
            loaded.set(true);
            return;
        };
        loaded.set(false);
        spawn_remote(
            ui,
            None,
            "Не удалось загрузить номер",
            async move {
                let result = api::room_details(id, index).await;
                loaded.set(true);
                result
            },
            move |found| room.set(Some((id, found))),
        );
    });

    move || {
        if !loaded.get() {
            return view! { <p class="page-status">"Загрузка..."</p> }.into_any();
        }
        match room.get() {
            Some((listing_id, room)) => view! { <RoomView listing_id=listing_id room=room/> }.into_any(),
            None => view! {
                <div class="not-found">
                    <h1>"Номер не найден"</h1>
                    <A href="/" attr:class="btn btn--primary">"К каталогу"</A>
                </div>
            }
            .into_any(),
        }
    }
}
