//! Moderation queue tab.

use leptos::prelude::*;

use crate::components::admin::moderation_dialog::ModerationDialog;
use crate::components::listing_card::ListingCard;
use crate::net::api;
use crate::net::types::{Listing, ModerationStatus};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::remote::spawn_remote;

const QUEUES: [(ModerationStatus, &str); 4] = [
    (ModerationStatus::Pending, "Новые"),
    (ModerationStatus::AwaitingRecheck, "Повторная проверка"),
    (ModerationStatus::NeedsChanges, "На доработке"),
    (ModerationStatus::Rejected, "Отклонённые"),
];

#[component]
pub fn ModerationTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let queue = RwSignal::new(ModerationStatus::Pending);
    let listings = RwSignal::new(Vec::<Listing>::new());
    let loading = RwSignal::new(false);
    let reviewing = RwSignal::new(None::<Listing>);
    let busy = RwSignal::new(false);

    let token = Memo::new(move |_| auth.with(AuthState::admin_token));

    Effect::new(move || {
        let status = queue.get();
        let Some(token) = token.get() else {
            return;
        };
        listings.set(Vec::new());
        spawn_remote(
            ui,
            Some(loading),
            "Не удалось загрузить очередь",
            async move { api::moderation_queue(&token, status.as_str()).await },
            move |items| listings.set(items),
        );
    });

    let on_submit = Callback::new(move |(status, comment): (ModerationStatus, String)| {
        let (Some(token), Some(listing)) = (token.get_untracked(), reviewing.get_untracked()) else {
            return;
        };
        let id = listing.id;
        let wire = status.as_str().to_owned();
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сохранить решение",
            async move { api::moderate_listing(&token, id, &wire, &comment).await },
            move |_| {
                listings.update(|items| items.retain(|l| l.id != id));
                reviewing.set(None);
                ui.update(|u| {
                    u.success("Решение сохранено");
                });
            },
        );
    });

    view! {
        <section class="admin-tab">
            <div class="segmented">
                {QUEUES
                    .into_iter()
                    .map(|(status, label)| {
                        let active = status.clone();
                        view! {
                            <button
                                class="segmented__item"
                                class=("segmented__item--active", move || queue.get() == active)
                                on:click=move |_| queue.set(status.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="admin-tab__status">"Загрузка..."</p> }
            >
                <Show
                    when=move || listings.with(|l| !l.is_empty())
                    fallback=|| view! { <p class="admin-tab__status">"Очередь пуста"</p> }
                >
                    <div class="moderation-list">
                        <For each=move || listings.get() key=|listing| listing.id let:listing>
                            <div class="moderation-item">
                                {
                                    let comment = listing.moderation_comment.clone().filter(|c| !c.is_empty());
                                    let stored = listing.clone();
                                    view! {
                                        <ListingCard listing=listing/>
                                        {comment.map(|c| view! { <p class="moderation-item__comment">{c}</p> })}
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| reviewing.set(Some(stored.clone()))
                                        >
                                            "Рассмотреть"
                                        </button>
                                    }
                                }
                            </div>
                        </For>
                    </div>
                </Show>
            </Show>
            {move || {
                reviewing
                    .get()
                    .map(|listing| {
                        view! {
                            <ModerationDialog
                                listing=listing
                                on_submit=on_submit
                                on_close=Callback::new(move |()| reviewing.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}
