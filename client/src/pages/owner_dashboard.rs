//! Owner dashboard at `/owner`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owners see their listings, pay for subscription extensions and
//! promotion from their balance, follow traffic, and read the balance
//! history. Edits go through the owner
//! update function and re-enter moderation on request.
//!
//! TRADE-OFFS
//! ==========
//! Subscription details are fetched per listing after the list arrives; a
//! failed lookup leaves that listing without extension prices rather than
//! failing the whole dashboard.

use futures::future::join_all;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::admin::listing_form_dialog::ListingFormDialog;
use crate::components::live_countdown::LiveCountdown;
use crate::components::owner::promotion_tab::PromotionTab;
use crate::components::owner::statistics_tab::StatisticsTab;
use crate::net::api;
use crate::net::types::{Listing, OwnerSession, SubscriptionInfo, Transaction};
use crate::state::auth::AuthState;
use crate::state::listing_form::ListingForm;
use crate::state::listing_stats::StatsState;
use crate::state::owner_dashboard::{
    EXTENSION_DAYS, OwnerDashboardState, OwnerTab, can_request_recheck, extension_price, is_expired, is_expiring_soon,
};
use crate::state::promotion::PromotionState;
use crate::state::ui::UiState;
use crate::util::auth::{install_owner_redirect, logout_owner};
use crate::util::{browser, format, remote::spawn_remote, subscription};

const TRANSACTIONS_LIMIT: u32 = 100;

struct DashboardData {
    listings: Vec<Listing>,
    subscriptions: Vec<(i64, SubscriptionInfo)>,
    transactions: Vec<Transaction>,
}

async fn fetch_dashboard(session: OwnerSession) -> Result<DashboardData, String> {
    let listings = api::owner_listings(&session.token, session.owner_id).await?;
    let lookups = join_all(listings.iter().map(|l| async move { (l.id, api::subscription_info(l.id).await) })).await;
    let subscriptions = lookups
        .into_iter()
        .filter_map(|(id, outcome)| outcome.map(|info| (id, info)).map_err(|e| log::debug!("subscription lookup for {id} failed: {e}")).ok())
        .collect();
    let transactions = api::owner_transactions(&session.token, session.owner_id, TRANSACTIONS_LIMIT).await?;
    Ok(DashboardData { listings, subscriptions, transactions })
}

fn load(session: OwnerSession, ui: RwSignal<UiState>, state: RwSignal<OwnerDashboardState>) {
    state.update(|s| s.loading = true);
    spawn_remote(
        ui,
        None,
        "Не удалось загрузить кабинет",
        async move {
            let result = fetch_dashboard(session).await;
            state.update(|s| s.loading = false);
            result
        },
        move |data| {
            state.update(|s| {
                s.listings = data.listings;
                s.transactions = data.transactions;
                s.subscriptions.clear();
                for (listing_id, info) in data.subscriptions {
                    s.set_subscription(listing_id, info);
                }
            });
        },
    );
}

// =============================================================================
// OVERVIEW
// =============================================================================

#[component]
fn OwnerListingRow(listing: Listing, on_edit: Callback<Listing>, on_recheck: Callback<Listing>) -> impl IntoView {
    let status = subscription::subscription_status(listing.subscription_expires_at.as_deref(), subscription::now());
    let recheck = can_request_recheck(&listing);
    let cover = listing.cover_image().map(str::to_owned);
    let comment = listing.moderation_comment.clone().filter(|c| !c.is_empty());
    let edit_target = listing.clone();
    let recheck_target = listing.clone();

    view! {
        <div class="owner-listing">
            {cover.map(|src| view! { <img class="owner-listing__image" src=src alt=""/> })}
            <div class="owner-listing__body">
                <A href=format!("/listing/{}", listing.id) attr:class="owner-listing__title">{listing.title.clone()}</A>
                <p class="muted">{format!("{}, {}", listing.city, listing.address)}</p>
                <div class="badges">
                    <span class="badge">{listing.moderation_status.label()}</span>
                    <span class=status.tone.badge_class()>{status.text}</span>
                    {listing.is_archived.then(|| view! { <span class="badge badge--muted">"В архиве"</span> })}
                </div>
                {comment.map(|c| view! { <p class="owner-listing__comment">{format!("Комментарий модератора: {c}")}</p> })}
            </div>
            <div class="owner-listing__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_target.clone())>"Редактировать"</button>
                {recheck.then(|| {
                    view! {
                        <button class="btn btn--small btn--primary" on:click=move |_| on_recheck.run(recheck_target.clone())>
                            "Отправить на проверку"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

#[component]
fn SubscriptionRow(listing: Listing, info: Option<SubscriptionInfo>, on_extend: Callback<(i64, i64)>) -> impl IntoView {
    let expired = is_expired(&listing, info.as_ref());
    let soon = is_expiring_soon(info.as_ref());
    let expires_at = info.as_ref().and_then(|i| i.expires_at().map(str::to_owned)).or_else(|| listing.subscription_expires_at.clone());
    let id = listing.id;
    let packages = EXTENSION_DAYS
        .into_iter()
        .map(|days| {
            let price = info.as_ref().and_then(|i| extension_price(i, days));
            let caption = match price {
                Some(amount) => format!("+{days} дней · {}", format::balance(amount)),
                None => format!("+{days} дней"),
            };
            view! {
                <button class="btn btn--small" on:click=move |_| on_extend.run((id, days))>
                    {caption}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="subscription-row" class=("subscription-row--expired", expired) class=("subscription-row--soon", soon)>
            <div class="subscription-row__title">{listing.title.clone()}</div>
            <div class="subscription-row__timer">
                {match expires_at {
                    Some(at) if !expired => view! { <LiveCountdown expires_at=at/> }.into_any(),
                    _ => view! { <span class="badge badge--danger">"Подписка не активна"</span> }.into_any(),
                }}
            </div>
            <div class="subscription-row__packages">{packages}</div>
        </div>
    }
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

#[component]
fn TransactionsTable(transactions: Vec<Transaction>) -> impl IntoView {
    if transactions.is_empty() {
        return view! { <p class="page-status">"Операций пока нет"</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Дата"</th>
                    <th>"Операция"</th>
                    <th>"Сумма"</th>
                    <th>"Баланс"</th>
                </tr>
            </thead>
            <tbody>
                {transactions
                    .into_iter()
                    .map(|t| {
                        view! {
                            <tr>
                                <td>{t.created_at.as_deref().map(format::date_time).unwrap_or_default()}</td>
                                <td>{t.description.clone().unwrap_or_else(|| t.kind.clone())}</td>
                                <td class=("amount--positive", {t.amount > 0.0})>{format::signed_amount(t.amount)}</td>
                                <td>{t.balance_after.map(format::balance).unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn OwnerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_owner_redirect(auth, use_navigate());

    let state = RwSignal::new(OwnerDashboardState::default());
    let promotion = RwSignal::new(PromotionState::default());
    let stats = RwSignal::new(StatsState::default());
    let editing = RwSignal::new(None::<Listing>);
    let busy = RwSignal::new(false);
    let session = Memo::new(move |_| auth.with(|a| a.owner.clone()));

    let reload = move || {
        if let Some(session) = session.get_untracked() {
            load(session, ui, state);
        }
    };

    Effect::new(move || {
        if let Some(session) = session.get() {
            load(session, ui, state);
        }
    });

    let on_edit = Callback::new(move |listing: Listing| editing.set(Some(listing)));

    let on_recheck = Callback::new(move |listing: Listing| {
        let Some(session) = session.get_untracked() else {
            return;
        };
        let id = listing.id;
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось отправить на проверку",
            async move { api::submit_for_recheck(&session.token, id).await },
            move |_| {
                state.update(|s| s.mark_awaiting_recheck(id));
                ui.update(|u| {
                    u.success("Объект отправлен на повторную проверку");
                });
            },
        );
    });

    let on_save = Callback::new(move |form: ListingForm| {
        let (Some(session), Some(listing)) = (session.get_untracked(), editing.get_untracked()) else {
            return;
        };
        let body = form.payload();
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сохранить объект",
            async move { api::owner_update_listing(&session.token, listing.id, &body).await },
            move |_| {
                editing.set(None);
                ui.update(|u| {
                    u.success("Изменения сохранены");
                });
                reload();
            },
        );
    });

    let on_extend = Callback::new(move |(listing_id, days): (i64, i64)| {
        let Some(session) = session.get_untracked() else {
            return;
        };
        if !browser::confirm(&format!("Продлить подписку на {days} дней? Сумма спишется с баланса.")) {
            return;
        }
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось продлить подписку",
            async move { api::extend_subscription(&session.token, session.owner_id, listing_id, days).await },
            move |_| {
                ui.update(|u| {
                    u.success("Подписка продлена");
                });
                reload();
            },
        );
    });

    let on_paid = Callback::new(move |()| reload());

    let tab_body = move || {
        let tab = state.with(|s| s.tab);
        match tab {
            OwnerTab::Overview => {
                let listings = state.with(|s| s.listings.clone());
                if listings.is_empty() {
                    return view! { <p class="page-status">"У вас пока нет объектов"</p> }.into_any();
                }
                listings
                    .into_iter()
                    .map(|listing| view! { <OwnerListingRow listing=listing on_edit=on_edit on_recheck=on_recheck/> })
                    .collect_view()
                    .into_any()
            }
            OwnerTab::Subscriptions => state
                .with(|s| {
                    s.listings_by_urgency()
                        .into_iter()
                        .map(|l| (l.clone(), s.subscriptions.get(&l.id).cloned()))
                        .collect::<Vec<_>>()
                })
                .into_iter()
                .map(|(listing, info)| view! { <SubscriptionRow listing=listing info=info on_extend=on_extend/> })
                .collect_view()
                .into_any(),
            OwnerTab::Promotion => {
                let listings = state.with_untracked(|s| s.listings.clone());
                match session.get_untracked() {
                    Some(session) if !listings.is_empty() => {
                        view! { <PromotionTab listings=listings promotion=promotion session=session on_paid=on_paid/> }.into_any()
                    }
                    _ => view! { <p class="page-status">"У вас пока нет объектов"</p> }.into_any(),
                }
            }
            OwnerTab::Statistics => {
                let listings = state.with_untracked(|s| s.listings.clone());
                view! { <StatisticsTab listings=listings stats=stats/> }.into_any()
            }
            OwnerTab::Transactions => {
                view! { <TransactionsTable transactions=state.with(|s| s.transactions.clone())/> }.into_any()
            }
        }
    };

    view! {
        <Show when=move || session.with(Option::is_some)>
            <div class="owner-page">
                <header class="owner-page__header">
                    <div>
                        <h1>"Кабинет владельца"</h1>
                        <p class="muted">{move || session.with(|s| s.as_ref().map(|s| s.full_name.clone()).unwrap_or_default())}</p>
                    </div>
                    <div class="owner-page__balance">
                        "Баланс: "
                        <strong>{move || state.with(|s| s.current_balance().map_or_else(|| "—".to_owned(), format::balance))}</strong>
                    </div>
                    <button class="btn btn--small" on:click=move |_| logout_owner(auth)>"Выйти"</button>
                </header>
                <nav class="tabs">
                    {OwnerTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__item"
                                    class=("tabs__item--active", move || state.with(|s| s.tab == tab))
                                    on:click=move |_| state.update(|s| s.tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="page-status">"Загрузка..."</p> }
                >
                    {tab_body}
                </Show>
                {move || {
                    editing.get().map(|listing| {
                        let token = session.with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
                        view! {
                            <ListingFormDialog
                                listing=Some(listing)
                                on_submit=on_save
                                on_close=Callback::new(move |()| editing.set(None))
                                token=token
                                busy=busy
                            />
                        }
                    })
                }}
            </div>
        </Show>
    }
}
