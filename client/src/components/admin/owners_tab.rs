//! Owner management tab: search, create/edit, bonuses, listing links.

use leptos::prelude::*;

use crate::components::admin::assign_listings_modal::AssignListingsModal;
use crate::components::admin::bonus_dialog::BonusDialog;
use crate::components::admin::owner_card::{OwnerAction, OwnerCard};
use crate::components::admin::owner_form_dialog::OwnerFormDialog;
use crate::net::api;
use crate::net::types::Owner;
use crate::state::auth::AuthState;
use crate::state::owners::{AssignState, OwnerForm, search_owners};
use crate::state::ui::UiState;
use crate::util::{browser, format, remote::spawn_remote};

#[derive(Clone, Debug)]
enum OwnerDialog {
    Create,
    Edit(Owner),
    Bonus(Owner),
}

fn load(token: String, ui: RwSignal<UiState>, owners: RwSignal<Vec<Owner>>, loading: RwSignal<bool>) {
    spawn_remote(ui, Some(loading), "Не удалось загрузить владельцев", async move { api::list_owners(&token).await }, move |list| {
        owners.set(list);
    });
}

/// Link every selected listing; stops at the first failure.
async fn assign_all(token: String, owner_id: i64, listing_ids: Vec<i64>) -> Result<usize, String> {
    for id in &listing_ids {
        api::assign_listing(&token, *id, Some(owner_id)).await?;
    }
    Ok(listing_ids.len())
}

#[component]
pub fn OwnersTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let owners = RwSignal::new(Vec::<Owner>::new());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let dialog = RwSignal::new(None::<OwnerDialog>);
    let assign = RwSignal::new(None::<AssignState>);

    let token = Memo::new(move |_| auth.with(AuthState::admin_token));
    let reload = move || {
        if let Some(token) = token.get_untracked() {
            load(token, ui, owners, loading);
        }
    };

    Effect::new(move || {
        if let Some(token) = token.get() {
            load(token, ui, owners, loading);
        }
    });

    let close = Callback::new(move |()| dialog.set(None));

    let on_action = Callback::new(move |(action, owner): (OwnerAction, Owner)| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        match action {
            OwnerAction::Edit => dialog.set(Some(OwnerDialog::Edit(owner))),
            OwnerAction::Bonus => dialog.set(Some(OwnerDialog::Bonus(owner))),
            OwnerAction::Assign => {
                let owner_id = owner.id;
                spawn_remote(ui, Some(busy), "Не удалось загрузить объекты", async move { api::available_listings(&token).await }, move |listings| {
                    assign.set(Some(AssignState::new(owner_id, listings)));
                });
            }
            OwnerAction::Archive => {
                if browser::confirm(&format!("Архивировать владельца {}?", owner.full_name)) {
                    let id = owner.id;
                    spawn_remote(ui, None, "Не удалось архивировать владельца", async move { api::archive_owner(&token, id).await }, move |_| {
                        owners.update(|list| list.retain(|o| o.id != id));
                        ui.update(|u| {
                            u.success("Владелец в архиве");
                        });
                    });
                }
            }
        }
    });

    let on_form = Callback::new(move |form: OwnerForm| {
        let Some(token) = token.get_untracked() else {
            return;
        };
        let editing = match dialog.get_untracked() {
            Some(OwnerDialog::Edit(owner)) => Some(owner.id),
            _ => None,
        };
        let body = form.payload(editing);
        spawn_remote(
            ui,
            Some(busy),
            "Не удалось сохранить владельца",
            async move {
                match editing {
                    Some(_) => api::update_owner(&token, &body).await,
                    None => api::create_owner(&token, &body).await,
                }
            },
            move |_| {
                dialog.set(None);
                ui.update(|u| {
                    u.success("Владелец сохранён");
                });
                reload();
            },
        );
    });

    let on_bonus = Callback::new(move |amount: i64| {
        let (Some(token), Some(OwnerDialog::Bonus(owner))) = (token.get_untracked(), dialog.get_untracked()) else {
            return;
        };
        let owner_id = owner.id;
        spawn_remote(ui, Some(busy), "Не удалось начислить бонус", async move { api::add_bonus(&token, owner_id, amount).await }, move |_| {
            dialog.set(None);
            ui.update(|u| {
                u.success(format!("Начислено {}", format::price(amount)));
            });
            reload();
        });
    });

    let on_assign = Callback::new(move |listing_ids: Vec<i64>| {
        let (Some(token), Some(owner_id)) = (token.get_untracked(), assign.with_untracked(|a| a.as_ref().map(|a| a.owner_id))) else {
            return;
        };
        spawn_remote(ui, Some(busy), "Не удалось привязать объекты", assign_all(token, owner_id, listing_ids), move |count| {
            assign.set(None);
            ui.update(|u| {
                u.success(format!("Привязано объектов: {count}"));
            });
            reload();
        });
    });

    let visible = move || owners.with(|list| search_owners(list, &query.get()).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <section class="admin-tab">
            <div class="admin-tab__toolbar">
                <input
                    class="field__input"
                    type="search"
                    placeholder="Поиск по имени, email, телефону, логину"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| dialog.set(Some(OwnerDialog::Create))>
                    "Добавить владельца"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="admin-tab__status">"Загрузка владельцев..."</p> }
            >
                <div class="owner-grid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|owner| view! { <OwnerCard owner=owner on_action=on_action/> })
                            .collect_view()
                    }}
                </div>
            </Show>
            {move || {
                dialog
                    .get()
                    .map(|open| match open {
                        OwnerDialog::Create => {
                            view! { <OwnerFormDialog owner=None on_submit=on_form on_close=close busy=busy/> }.into_any()
                        }
                        OwnerDialog::Edit(owner) => {
                            view! { <OwnerFormDialog owner=Some(owner) on_submit=on_form on_close=close busy=busy/> }
                                .into_any()
                        }
                        OwnerDialog::Bonus(owner) => {
                            view! { <BonusDialog owner=owner on_submit=on_bonus on_close=close/> }.into_any()
                        }
                    })
            }}
            <Show when=move || assign.with(Option::is_some)>
                <AssignListingsModal
                    state=assign
                    on_submit=on_assign
                    on_close=Callback::new(move |()| assign.set(None))
                    busy=busy
                />
            </Show>
        </section>
    }
}
