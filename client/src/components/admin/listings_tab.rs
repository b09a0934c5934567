//! Admin listings tab: inventory by city with every listing action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads active and archived listings in two requests, merges them into
//! `AdminListingsState`, and applies local updates once each remote call
//! succeeds. Dialogs are driven by a single `ListingDialog` signal.

use leptos::prelude::*;

use crate::components::admin::listing_card::{AdminListingCard, ListingAction};
use crate::components::admin::listing_form_dialog::ListingFormDialog;
use crate::components::admin::listings_filters::ListingsFilters;
use crate::components::admin::moderation_dialog::ModerationDialog;
use crate::components::admin::position_dialog::PositionDialog;
use crate::components::admin::subscription_dialog::SubscriptionDialog;
use crate::net::api::{self, ADMIN_PAGE_LIMIT};
use crate::net::types::{Listing, ModerationStatus, Permission};
use crate::state::admin_listings::AdminListingsState;
use crate::state::auth::AuthState;
use crate::state::listing_form::ListingForm;
use crate::state::ui::UiState;
use crate::util::{browser, remote::spawn_remote, subscription};

#[derive(Clone, Debug)]
enum ListingDialog {
    Create,
    Edit(Listing),
    Position(Listing),
    Moderate(Listing),
    Subscription(Listing),
}

fn load(token: String, ui: RwSignal<UiState>, state: RwSignal<AdminListingsState>) {
    state.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let active = api::list_listings(&token, false, ADMIN_PAGE_LIMIT, 0).await;
        let archived = api::list_listings(&token, true, ADMIN_PAGE_LIMIT, 0).await;
        match (active, archived) {
            (Ok(active), Ok(archived)) => state.update(|s| s.set_loaded(active, archived)),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("listings load failed: {e}");
                state.update(|s| s.loading = false);
                ui.update(|u| {
                    u.error("Не удалось загрузить объекты", e);
                });
            }
        }
    });
}

/// Save the form, then push expert ratings when they changed, then refetch
/// the listing so the card shows what the remote stored.
async fn save_listing(token: String, existing: Option<Listing>, form: ListingForm, with_ratings: bool) -> Result<Listing, String> {
    let id = match &existing {
        Some(listing) => {
            api::update_listing(&token, listing.id, &form.payload()).await?;
            listing.id
        }
        None => api::create_listing(&token, &form.payload()).await?.id,
    };
    let ratings_changed = existing.as_ref().map_or(true, |l| form.ratings_changed(l));
    if with_ratings && ratings_changed {
        api::update_expert_ratings(&token, id, &form.ratings_payload()).await?;
    }
    api::get_listing(&token, id).await
}

#[component]
pub fn ListingsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(AdminListingsState::default());
    let dialog = RwSignal::new(None::<ListingDialog>);
    let busy = RwSignal::new(false);

    let token = Memo::new(move |_| auth.with(AuthState::admin_token));
    let can_moderate = move || auth.with(|a| a.has_permission(Permission::Listings));
    let can_rate = move || auth.with(|a| a.has_permission(Permission::Settings));

    Effect::new(move || {
        if let Some(token) = token.get() {
            load(token, ui, state);
        }
    });

    let close = Callback::new(move |()| dialog.set(None));

    let on_action = Callback::new(move |(action, listing): (ListingAction, Listing)| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        let id = listing.id;
        match action {
            ListingAction::Edit => dialog.set(Some(ListingDialog::Edit(listing))),
            ListingAction::Position => dialog.set(Some(ListingDialog::Position(listing))),
            ListingAction::Moderate => dialog.set(Some(ListingDialog::Moderate(listing))),
            ListingAction::Subscription => dialog.set(Some(ListingDialog::Subscription(listing))),
            ListingAction::Archive => {
                if browser::confirm(&format!("Отправить «{}» в архив?", listing.title)) {
                    spawn_remote(ui, None, "Не удалось архивировать", async move { api::archive_listing(&token, id).await }, move |_| {
                        state.update(|s| s.set_archived(id, true));
                        ui.update(|u| {
                            u.success("Объект в архиве");
                        });
                    });
                }
            }
            ListingAction::Restore => {
                spawn_remote(ui, None, "Не удалось восстановить", async move { api::unarchive_listing(&token, id).await }, move |_| {
                    state.update(|s| s.set_archived(id, false));
                    ui.update(|u| {
                        u.success("Объект восстановлен");
                    });
                });
            }
            ListingAction::Delete => {
                if browser::confirm(&format!("Удалить «{}» без возможности восстановления?", listing.title)) {
                    spawn_remote(ui, None, "Не удалось удалить", async move { api::delete_listing(&token, id).await }, move |_| {
                        state.update(|s| s.remove(id));
                        ui.update(|u| {
                            u.success("Объект удалён");
                        });
                    });
                }
            }
        }
    });

    let on_form = Callback::new(move |form: ListingForm| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        let existing = match dialog.get_untracked() {
            Some(ListingDialog::Edit(listing)) => Some(listing),
            _ => None,
        };
        let with_ratings = can_rate();
        spawn_remote(ui, Some(busy), "Не удалось сохранить объект", save_listing(token, existing, form, with_ratings), move |saved| {
            state.update(|s| s.upsert(saved));
            dialog.set(None);
            ui.update(|u| {
                u.success("Объект сохранён");
            });
        });
    });

    let on_position = Callback::new(move |position: i64| {
        let (Some(token), Some(ListingDialog::Position(listing))) = (token.get_untracked(), dialog.get_untracked()) else {
            return;
        };
        let id = listing.id;
        spawn_remote(ui, Some(busy), "Не удалось изменить позицию", async move { api::update_position(&token, id, position).await }, move |_| {
            state.update(|s| s.apply_position(id, position));
            dialog.set(None);
        });
    });

    let on_moderate = Callback::new(move |(status, comment): (ModerationStatus, String)| {
        let (Some(token), Some(ListingDialog::Moderate(listing))) = (token.get_untracked(), dialog.get_untracked()) else {
            return;
        };
        let id = listing.id;
        let wire = status.as_str().to_owned();
        let sent = comment.clone();
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сохранить решение",
            async move { api::moderate_listing(&token, id, &wire, &sent).await },
            move |_| {
                let comment = (!comment.is_empty()).then_some(comment);
                state.update(|s| s.apply_moderation(id, status, comment));
                dialog.set(None);
            },
        );
    });

    let on_subscription = Callback::new(move |days: i64| {
        let (Some(token), Some(ListingDialog::Subscription(listing))) = (token.get_untracked(), dialog.get_untracked()) else {
            return;
        };
        let id = listing.id;
        spawn_remote(ui, Some(busy), "Не удалось изменить подписку", async move { api::admin_set_subscription(&token, id, days).await }, move |_| {
            state.update(|s| s.apply_subscription(id, days, subscription::now()));
            dialog.set(None);
            ui.update(|u| {
                u.success("Подписка обновлена");
            });
        });
    });

    let groups = move || {
        let now = subscription::now();
        state.with(|s| {
            s.grouped_by_city(now)
                .into_iter()
                .map(|(city, listings)| (city, listings.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="admin-tab">
            <div class="admin-tab__toolbar">
                <button class="btn btn--primary" on:click=move |_| dialog.set(Some(ListingDialog::Create))>
                    "Добавить объект"
                </button>
                <button
                    class="btn"
                    on:click=move |_| {
                        if let Some(token) = token.get_untracked() {
                            load(token, ui, state);
                        }
                    }
                >
                    "Обновить"
                </button>
            </div>
            <ListingsFilters state=state/>
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="admin-tab__status">"Загрузка объектов..."</p> }
            >
                {move || {
                    let now = subscription::now();
                    let groups = groups();
                    if groups.is_empty() {
                        return view! { <p class="admin-tab__status">"Нет объектов по выбранным фильтрам"</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(city, listings)| {
                            let title = if city.is_empty() { "Без города".to_owned() } else { city };
                            view! {
                                <div class="admin-group">
                                    <h3 class="admin-group__title">{format!("{title} · {}", listings.len())}</h3>
                                    <div class="admin-group__grid">
                                        {listings
                                            .into_iter()
                                            .map(|listing| {
                                                view! {
                                                    <AdminListingCard
                                                        listing=listing
                                                        now=now
                                                        on_action=on_action
                                                        can_moderate=can_moderate()
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </Show>
            {move || {
                dialog
                    .get()
                    .map(|open| match open {
                        ListingDialog::Create => view! {
                            <ListingFormDialog
                                listing=None
                                token=token.get_untracked()
                                show_ratings=can_rate()
                                on_submit=on_form
                                on_close=close
                                busy=busy
                            />
                        }
                            .into_any(),
                        ListingDialog::Edit(listing) => view! {
                            <ListingFormDialog
                                listing=Some(listing)
                                token=token.get_untracked()
                                show_ratings=can_rate()
                                on_submit=on_form
                                on_close=close
                                busy=busy
                            />
                        }
                            .into_any(),
                        ListingDialog::Position(listing) => {
                            view! { <PositionDialog listing=listing on_submit=on_position on_close=close/> }.into_any()
                        }
                        ListingDialog::Moderate(listing) => {
                            view! { <ModerationDialog listing=listing on_submit=on_moderate on_close=close/> }.into_any()
                        }
                        ListingDialog::Subscription(listing) => {
                            view! { <SubscriptionDialog listing=listing on_submit=on_subscription on_close=close/> }.into_any()
                        }
                    })
            }}
        </section>
    }
}
