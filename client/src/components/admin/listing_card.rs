//! Admin card for one listing with its management actions.

use leptos::prelude::*;
use time::OffsetDateTime;

use crate::components::live_countdown::LiveCountdown;
use crate::net::types::{Listing, UNPLACED_POSITION};
use crate::util::{format, subscription};

/// What the admin asked to do with a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingAction {
    Edit,
    Position,
    Moderate,
    Subscription,
    Archive,
    Restore,
    Delete,
}

#[component]
pub fn AdminListingCard(
    listing: Listing,
    now: OffsetDateTime,
    on_action: Callback<(ListingAction, Listing)>,
    #[prop(optional)] can_moderate: bool,
) -> impl IntoView {
    let status = subscription::subscription_status(listing.subscription_expires_at.as_deref(), now);
    let position = if listing.auction >= UNPLACED_POSITION {
        "Без позиции".to_owned()
    } else {
        format!("Позиция №{}", listing.auction)
    };
    let cover = listing.cover_image().map(str::to_owned);
    let archived = listing.is_archived;
    let owner = listing.owner_name.clone().filter(|n| !n.is_empty());
    let comment = listing.moderation_comment.clone().filter(|c| !c.is_empty());
    let moderation_label = listing.moderation_status.label();
    let moderation_class = format!("badge badge--moderation badge--{}", listing.moderation_status.as_str());
    let expert = listing.has_expert_rating();
    let expires = listing.subscription_expires_at.clone();
    let stored = StoredValue::new(listing.clone());

    let act = move |action: ListingAction| on_action.run((action, stored.get_value()));

    view! {
        <article class="admin-card" class=("admin-card--archived", archived)>
            <div class="admin-card__media">
                {cover.map(|src| view! { <img src=src alt="" loading="lazy"/> })}
            </div>
            <div class="admin-card__body">
                <header class="admin-card__header">
                    <h3 class="admin-card__title">{listing.title.clone()}</h3>
                    <span class="admin-card__id">{format!("#{}", listing.id)}</span>
                </header>
                <p class="admin-card__meta">
                    {format!("{} · {} · {}", listing.kind, listing.district, format::price(listing.min_price()))}
                </p>
                <div class="admin-card__badges">
                    <span class=moderation_class>{moderation_label}</span>
                    <span class=status.tone.badge_class() title="Подписка">{status.text.clone()}</span>
                    <span class="badge">{position}</span>
                    {expert.then(|| view! { <span class="badge badge--expert">"Оценено"</span> })}
                    {archived.then(|| view! { <span class="badge badge--muted">"В архиве"</span> })}
                </div>
                {expires
                    .filter(|_| status.days_left.is_some_and(|d| d > 0))
                    .map(|at| {
                        view! {
                            <p class="admin-card__countdown">
                                "Осталось: " <LiveCountdown expires_at=at/>
                            </p>
                        }
                    })}
                {owner.map(|name| view! { <p class="admin-card__owner">{format!("Владелец: {name}")}</p> })}
                {comment.map(|text| view! { <p class="admin-card__comment">{format!("Комментарий: {text}")}</p> })}
            </div>
            <footer class="admin-card__actions">
                <button class="btn btn--small" on:click=move |_| act(ListingAction::Edit)>"Изменить"</button>
                <button class="btn btn--small" on:click=move |_| act(ListingAction::Position)>"Позиция"</button>
                <button class="btn btn--small" on:click=move |_| act(ListingAction::Subscription)>"Подписка"</button>
                {can_moderate
                    .then(|| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| act(ListingAction::Moderate)>
                                "Модерация"
                            </button>
                        }
                    })}
                {if archived {
                    view! {
                        <button class="btn btn--small" on:click=move |_| act(ListingAction::Restore)>"Восстановить"</button>
                        <button class="btn btn--small btn--danger" on:click=move |_| act(ListingAction::Delete)>
                            "Удалить навсегда"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button class="btn btn--small btn--danger" on:click=move |_| act(ListingAction::Archive)>
                            "В архив"
                        </button>
                    }
                        .into_any()
                }}
            </footer>
        </article>
    }
}
