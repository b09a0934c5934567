//! Owner sign-in and registration at `/owner/login`.

#[cfg(test)]
#[path = "owner_login_test.rs"]
mod owner_login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::field::{TextField, bind_field};
use crate::net::api;
use crate::net::types::OwnerAuthResponse;
use crate::state::auth::AuthState;
use crate::util::auth::login_owner;

#[derive(Clone, Debug, Default)]
struct OwnerCredentials {
    login: String,
    password: String,
    full_name: String,
    phone: String,
}

impl OwnerCredentials {
    fn validate(&self, registering: bool) -> Result<(), &'static str> {
        if self.login.trim().is_empty() || self.password.is_empty() {
            return Err("Введите логин и пароль");
        }
        if registering && self.full_name.trim().is_empty() {
            return Err("Укажите ваше имя");
        }
        Ok(())
    }
}

#[component]
pub fn OwnerLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(OwnerCredentials::default());
    let registering = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let to_dashboard = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| a.owner.is_some()) {
            to_dashboard("/owner", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let creds = form.get_untracked();
        let register = registering.get_untracked();
        if let Err(message) = creds.validate(register) {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let login = creds.login.trim();
            let result: Result<OwnerAuthResponse, String> = if register {
                api::owner_register(login, &creds.password, creds.full_name.trim(), creds.phone.trim()).await
            } else {
                api::owner_login(login, &creds.password).await
            };
            busy.set(false);
            match result.and_then(OwnerAuthResponse::into_session) {
                Ok(session) => {
                    log::info!("owner {} signed in", session.owner_id);
                    login_owner(auth, session);
                    navigate("/owner", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("owner auth failed: {e}");
                    error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Кабинет владельца"</h1>
                <div class="segmented">
                    <button
                        type="button"
                        class="segmented__item"
                        class=("segmented__item--active", move || !registering.get())
                        on:click=move |_| registering.set(false)
                    >
                        "Вход"
                    </button>
                    <button
                        type="button"
                        class="segmented__item"
                        class=("segmented__item--active", move || registering.get())
                        on:click=move |_| registering.set(true)
                    >
                        "Регистрация"
                    </button>
                </div>
                <Show when=move || registering.get()>
                    <TextField label="Имя и фамилия" binding=bind_field!(form, full_name)/>
                    <TextField label="Телефон" input_type="tel" binding=bind_field!(form, phone)/>
                </Show>
                <TextField label="Email или логин" binding=bind_field!(form, login)/>
                <TextField label="Пароль" input_type="password" binding=bind_field!(form, password)/>
                {move || error.get().map(|message| view! { <p class="login-card__error">{message}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || match (busy.get(), registering.get()) {
                        (true, _) => "Подождите...",
                        (false, true) => "Зарегистрироваться",
                        (false, false) => "Войти",
                    }}
                </button>
            </form>
        </div>
    }
}
