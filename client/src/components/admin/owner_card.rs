//! Admin card for one owner account.

use leptos::prelude::*;

use crate::net::types::Owner;
use crate::util::format;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerAction {
    Edit,
    Bonus,
    Assign,
    Archive,
}

#[component]
pub fn OwnerCard(owner: Owner, on_action: Callback<(OwnerAction, Owner)>) -> impl IntoView {
    let stored = StoredValue::new(owner.clone());
    let act = move |action: OwnerAction| on_action.run((action, stored.get_value()));
    let hotels = owner.hotels.clone();
    let created = owner.created_at.as_deref().map(format::date);

    view! {
        <article class="owner-card">
            <header class="owner-card__header">
                <h3 class="owner-card__name">{owner.full_name.clone()}</h3>
                <span class="owner-card__id">{format!("#{}", owner.id)}</span>
            </header>
            <dl class="owner-card__details">
                <dt>"Email"</dt>
                <dd>{owner.email.clone()}</dd>
                <dt>"Телефон"</dt>
                <dd>{owner.phone.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                <dt>"Логин"</dt>
                <dd>{owner.login.clone().unwrap_or_else(|| "—".to_owned())}</dd>
                <dt>"Баланс"</dt>
                <dd>{format::balance(owner.balance)}</dd>
                <dt>"Бонусы"</dt>
                <dd>{format::balance(owner.bonus_balance)}</dd>
            </dl>
            {created.map(|date| view! { <p class="owner-card__meta">{format!("Зарегистрирован {date}")}</p> })}
            <div class="owner-card__hotels">
                {if hotels.is_empty() {
                    view! { <p class="owner-card__empty">"Нет привязанных объектов"</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {hotels
                                .into_iter()
                                .map(|hotel| view! { <li>{format!("{} · {}", hotel.title, hotel.city)}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
            <footer class="owner-card__actions">
                <button class="btn btn--small" on:click=move |_| act(OwnerAction::Edit)>"Изменить"</button>
                <button class="btn btn--small" on:click=move |_| act(OwnerAction::Bonus)>"Бонус"</button>
                <button class="btn btn--small" on:click=move |_| act(OwnerAction::Assign)>"Привязать объекты"</button>
                <button class="btn btn--small btn--danger" on:click=move |_| act(OwnerAction::Archive)>"В архив"</button>
            </footer>
        </article>
    }
}
