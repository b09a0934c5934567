//! Back-office sign-in at `/admin/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::login_admin;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let to_panel = navigate.clone();
    Effect::new(move || {
        if auth.with(|a| a.admin.is_some()) {
            to_panel("/admin", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let login_value = login.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if login_value.is_empty() || password_value.is_empty() {
            error.set(Some("Введите логин и пароль".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::admin_login(&login_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    if login_admin(auth, response.token) {
                        ui.update(|u| {
                            u.success("Добро пожаловать");
                        });
                        navigate("/admin", NavigateOptions::default());
                    } else {
                        error.set(Some("Сервер вернул недействительный токен".to_owned()));
                    }
                }
                Err(e) => {
                    log::warn!("admin login failed: {e}");
                    error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Вход в админ-панель"</h1>
                <input
                    class="field__input"
                    placeholder="Логин или email"
                    autocomplete="username"
                    prop:value=move || login.get()
                    on:input=move |ev| login.set(event_target_value(&ev))
                />
                <input
                    class="field__input"
                    type="password"
                    placeholder="Пароль"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="login-card__error">{message}</p> })}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Вход..." } else { "Войти" }}
                </button>
            </form>
        </div>
    }
}
