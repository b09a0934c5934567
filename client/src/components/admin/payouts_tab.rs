//! Employee payouts tab (superadmin only).

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::bonuses::BonusesState;
use crate::state::ui::UiState;
use crate::util::{format, remote::spawn_remote};

#[component]
pub fn PayoutsTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(BonusesState::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let token = Memo::new(move |_| auth.with(AuthState::admin_token));

    let load_summaries = move || {
        if let Some(token) = token.get_untracked() {
            spawn_remote(ui, Some(loading), "Не удалось загрузить выплаты", async move { api::bonus_summaries(&token).await }, move |rows| {
                state.update(|s| s.summaries = rows);
            });
        }
    };

    let load_bonuses = move || {
        let (Some(token), Some(admin_id)) = (token.get_untracked(), state.with_untracked(|s| s.admin_id)) else {
            return;
        };
        let include_paid = state.with_untracked(|s| s.include_paid);
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось загрузить бонусы",
            async move { api::employee_bonuses(&token, admin_id, include_paid).await },
            move |rows| {
                state.update(|s| {
                    if s.admin_id == Some(admin_id) {
                        s.set_bonuses(rows);
                    }
                });
            },
        );
    };

    Effect::new(move || {
        if token.get().is_some() {
            load_summaries();
        }
    });

    let mark = move |paid: bool| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        let ids = state.with_untracked(|s| s.ids_to_mark(paid));
        if ids.is_empty() {
            ui.update(|u| {
                u.error("Нечего отмечать", "Выберите бонусы в списке");
            });
            return;
        }
        let sent = ids.clone();
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось обновить выплаты",
            async move { api::mark_bonuses(&token, &sent, paid).await },
            move |_| {
                state.update(|s| s.apply_marked(&ids, paid));
                ui.update(|u| {
                    u.success(if paid { "Отмечено как выплачено" } else { "Выплата отменена" });
                });
            },
        );
    };

    let summaries = move || {
        state
            .with(|s| s.summaries.clone())
            .into_iter()
            .map(|row| {
                let admin_id = row.admin_id;
                let name = if row.full_name.is_empty() { row.email.clone().unwrap_or_default() } else { row.full_name.clone() };
                view! {
                    <tr
                        class="table__row--clickable"
                        class=("table__row--active", move || state.with(|s| s.admin_id == Some(admin_id)))
                        on:click=move |_| {
                            state.update(|s| s.select_employee(admin_id));
                            load_bonuses();
                        }
                    >
                        <td>{name}</td>
                        <td>{format::balance(row.total_unpaid)}</td>
                        <td>{format::balance(row.total_paid)}</td>
                        <td>{row.unpaid_count.to_string()}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    let bonuses = move || {
        state
            .with(|s| s.bonuses.clone())
            .into_iter()
            .map(|bonus| {
                let id = bonus.id;
                let what = bonus.description.clone().unwrap_or_else(|| bonus.action_type.clone());
                let listing = bonus.listing_title.clone().or_else(|| bonus.listing_id.map(|l| format!("#{l}")));
                view! {
                    <tr class=("table__row--muted", bonus.is_paid)>
                        <td>
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.checked.contains(&id))
                                on:change=move |_| state.update(|s| s.toggle(id))
                            />
                        </td>
                        <td>{bonus.created_at.as_deref().map(format::date_time).unwrap_or_default()}</td>
                        <td>{what}</td>
                        <td>{listing.unwrap_or_default()}</td>
                        <td>{format::balance(bonus.amount)}</td>
                        <td>{if bonus.is_paid { "Выплачено" } else { "К выплате" }}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="admin-tab">
            <div class="admin-tab__toolbar">
                <strong>{move || format!("Всего к выплате: {}", format::balance(state.with(BonusesState::owed_overall)))}</strong>
                <button class="btn btn--small" on:click=move |_| load_summaries()>"Обновить"</button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="admin-tab__status">"Загрузка выплат..."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Сотрудник"</th>
                            <th>"К выплате"</th>
                            <th>"Выплачено"</th>
                            <th>"Бонусов"</th>
                        </tr>
                    </thead>
                    <tbody>{summaries}</tbody>
                </table>
            </Show>
            <Show when=move || state.with(|s| s.admin_id.is_some())>
                <div class="admin-tab__toolbar">
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.include_paid)
                            on:change=move |_| {
                                state.update(|s| s.include_paid = !s.include_paid);
                                load_bonuses();
                            }
                        />
                        " Показывать выплаченные"
                    </label>
                    <button class="btn btn--small" on:click=move |_| state.update(|s| s.toggle_all(false))>
                        "Выбрать все невыплаченные"
                    </button>
                    <span class="muted">
                        {move || format!("Выбрано на {}", format::balance(state.with(BonusesState::checked_total)))}
                    </span>
                    <button class="btn btn--small btn--primary" disabled=move || busy.get() on:click=move |_| mark(true)>
                        "Отметить выплаченными"
                    </button>
                    <button class="btn btn--small" disabled=move || busy.get() on:click=move |_| mark(false)>
                        "Отменить выплату"
                    </button>
                </div>
                <table class="table">
                    <tbody>{bonuses}</tbody>
                </table>
                {move || {
                    state
                        .with(|s| s.bonuses.is_empty())
                        .then(|| view! { <p class="admin-tab__status">"Бонусов нет"</p> })
                }}
            </Show>
        </section>
    }
}
