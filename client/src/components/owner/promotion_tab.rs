//! Promotion tab: fixed-price TOP-20 slots and the position auction.

use leptos::prelude::*;

use crate::net::api::{self, Bid};
use crate::net::types::{AuctionInfo, Listing, OwnerSession, Top20Response, UNPLACED_POSITION};
use crate::state::promotion::{
    AUCTION_MIN_BID, PromotionState, biddable_positions, holds_slot, min_bid, parse_bid, top20_eligibility,
};
use crate::state::ui::UiState;
use crate::util::{browser, format, remote::spawn_remote, subscription};

/// Load both markets of `city`; results for a listing no longer selected are dropped.
fn load_markets(ui: RwSignal<UiState>, promotion: RwSignal<PromotionState>, listing_id: i64, city: String) {
    spawn_remote(
        ui,
        None,
        "Не удалось загрузить позиции",
        async move {
            let (top20, auction) = futures::future::join(api::top20_positions(&city), api::auction_info(&city)).await;
            let auction = auction.map_err(|e| log::debug!("auction lookup for {city} failed: {e}")).ok();
            Ok::<_, String>((top20?, auction))
        },
        move |(top20, auction): (Top20Response, Option<AuctionInfo>)| {
            promotion.update(|p| {
                if p.listing_id == Some(listing_id) {
                    p.top20 = top20.positions;
                    p.auction = auction;
                }
            });
        },
    );
}

#[component]
pub fn PromotionTab(
    listings: Vec<Listing>,
    promotion: RwSignal<PromotionState>,
    session: OwnerSession,
    on_paid: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let busy = RwSignal::new(false);
    let listings = StoredValue::new(listings);
    let session = StoredValue::new(session);
    let selected = Memo::new(move |_| listings.with_value(|all| promotion.with(|p| p.selected(all).cloned())));

    Effect::new(move || {
        let Some(listing) = selected.get() else {
            return;
        };
        let mut switched = false;
        promotion.update(|p| switched = p.select_listing(listing.id));
        if switched || promotion.with_untracked(|p| p.top20.is_empty()) {
            load_markets(ui, promotion, listing.id, listing.city);
        }
    });

    let on_book = move |position: i64, price: i64| {
        let Some(listing) = selected.get_untracked() else {
            return;
        };
        if let Err(message) = top20_eligibility(&listing, subscription::now()) {
            ui.update(|u| {
                u.error("Недостаточно времени подписки", message);
            });
            return;
        }
        if !browser::confirm(&format!("Забронировать позицию #{position} за {} на 30 дней?", format::price(price))) {
            return;
        }
        promotion.update(|p| p.pending_position = Some(position));
        let token = session.with_value(|s| s.token.clone());
        let city = listing.city.clone();
        let listing_id = listing.id;
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось забронировать позицию",
            async move { api::book_top20(&token, listing_id, &city, position).await },
            move |receipt| {
                promotion.update(|p| p.pending_position = None);
                ui.update(|u| {
                    u.success(receipt.message.unwrap_or_else(|| format!("Позиция #{position} забронирована")));
                });
                load_markets(ui, promotion, listing_id, listing.city);
                on_paid.run(());
            },
        );
    };

    let minimum = move || promotion.with(|p| p.auction.as_ref().map_or(AUCTION_MIN_BID, |a| min_bid(a, p.bid_position)));

    let on_bid = move || {
        let Some(listing) = selected.get_untracked() else {
            return;
        };
        let (target_position, raw) = promotion.with_untracked(|p| (p.bid_position, p.bid_input.clone()));
        let bid_amount = match parse_bid(&raw, minimum()) {
            Ok(amount) => amount,
            Err(message) => {
                ui.update(|u| {
                    u.error("Ставка не принята", message);
                });
                return;
            }
        };
        let (token, owner_id) = session.with_value(|s| (s.token.clone(), s.owner_id));
        let bid = Bid { owner_id, listing_id: listing.id, city: listing.city.clone(), target_position, bid_amount };
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сделать ставку",
            async move { api::place_bid(&token, &bid).await },
            move |receipt| {
                promotion.update(|p| p.bid_input.clear());
                ui.update(|u| {
                    u.success(receipt.message.unwrap_or_else(|| format!("Позиция #{target_position} куплена")));
                });
                load_markets(ui, promotion, listing.id, listing.city);
                on_paid.run(());
            },
        );
    };

    let listing_picker = listings.with_value(|all| {
        all.iter()
            .map(|l| {
                let id = l.id;
                view! {
                    <button
                        class="chip"
                        class=("chip--active", move || selected.with(|s| s.as_ref().map(|l| l.id) == Some(id)))
                        on:click=move |_| promotion.update(|p| {
                            p.select_listing(id);
                        })
                    >
                        <strong>{l.title.clone()}</strong>
                        " "
                        <span class="muted">{l.city.clone()}</span>
                    </button>
                }
            })
            .collect_view()
    });

    let top20_rows = move || {
        let listing_id = selected.with(|s| s.as_ref().map(|l| l.id)).unwrap_or_default();
        promotion
            .with(|p| p.top20.clone())
            .into_iter()
            .map(|pos| {
                let position = pos.position;
                let price = pos.price;
                let mine = holds_slot(&pos, listing_id);
                let taken = pos.is_booked && !mine;
                let holder = pos.booking_info.as_ref().filter(|_| pos.is_booked).map(|b| b.listing_title.clone());
                let free = !pos.is_booked;
                view! {
                    <div class="top20-slot" class=("top20-slot--mine", mine) class=("top20-slot--taken", taken)>
                        <span class="top20-slot__position">{format!("#{position}")}</span>
                        <span class="top20-slot__status">{holder.unwrap_or_else(|| "Свободна".to_owned())}</span>
                        <span class="top20-slot__price">{format::price(price)}</span>
                        {mine.then(|| view! { <span class="badge">"Ваша позиция"</span> })}
                        {free.then(|| {
                            view! {
                                <button
                                    class="btn btn--small btn--primary"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_book(position, price)
                                >
                                    {move || {
                                        if busy.get() && promotion.with(|p| p.pending_position == Some(position)) {
                                            "Бронируем..."
                                        } else {
                                            "Забронировать"
                                        }
                                    }}
                                </button>
                            }
                        })}
                    </div>
                }
            })
            .collect_view()
    };

    let auction_card = move || {
        let listing_id = selected.with(|s| s.as_ref().map(|l| l.id)).unwrap_or_default();
        promotion.with(|p| p.auction.clone()).map(|info| {
            let positions = biddable_positions(&info);
            let ranking = info
                .listings
                .into_iter()
                .map(|entry| {
                    let mine = entry.id == listing_id;
                    let bid = entry.bid_amount.map(|b| format!("ставка {}", format::balance(b)));
                    view! {
                        <li class="auction__row" class=("auction__row--mine", mine)>
                            <span>{format!("#{}", entry.current_position)}</span>
                            " "
                            <span>{entry.title}</span>
                            {bid.map(|b| view! { <span class="muted">{format!(" · {b}")}</span> })}
                        </li>
                    }
                })
                .collect_view();
            view! {
                <div class="card auction">
                    <h3>"Аукцион позиций"</h3>
                    <p class="muted">
                        {move || match promotion.with(PromotionState::current_rank) {
                            Some(rank) if rank < UNPLACED_POSITION => format!("Текущая позиция: #{rank}"),
                            _ => "Объект пока без позиции".to_owned(),
                        }}
                    </p>
                    <ol class="auction__ranking">{ranking}</ol>
                    <div class="auction__form">
                        <select
                            class="field__input"
                            on:change=move |ev| {
                                if let Ok(position) = event_target_value(&ev).parse::<i64>() {
                                    promotion.update(|p| p.bid_position = position);
                                }
                            }
                        >
                            {positions
                                .into_iter()
                                .map(|position| {
                                    view! {
                                        <option
                                            value=position.to_string()
                                            selected=move || promotion.with(|p| p.bid_position == position)
                                        >
                                            {format!("Позиция #{position}")}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <input
                            class="field__input"
                            type="number"
                            min="1"
                            placeholder=move || format!("мин. {}", minimum())
                            prop:value=move || promotion.with(|p| p.bid_input.clone())
                            on:input=move |ev| promotion.update(|p| p.bid_input = event_target_value(&ev))
                        />
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| on_bid()>
                            "Сделать ставку"
                        </button>
                    </div>
                </div>
            }
        })
    };

    view! {
        <section class="promotion">
            <div class="chips promotion__listings">{listing_picker}</div>
            <Show
                when=move || selected.with(Option::is_some)
                fallback=|| view! { <p class="page-status">"Выберите объект"</p> }
            >
                <div class="card">
                    <h3>
                        {move || selected.with(|s| s.as_ref().map(|l| format!("ТОП-20 · {}", l.city)).unwrap_or_default())}
                    </h3>
                    <p class="muted">"Гарантированная позиция на 30 дней. Нужна подписка минимум на 30 дней."</p>
                    <div class="top20-slots">{top20_rows}</div>
                </div>
                {auction_card}
            </Show>
        </section>
    }
}
