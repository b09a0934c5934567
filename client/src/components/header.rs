//! Site header with primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Top bar shown on every route. The owner link switches between the
/// login page and the dashboard depending on the stored session.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let owner_href = move || if auth.get().owner.is_some() { "/owner" } else { "/owner/login" };
    let owner_label = move || {
        auth.get()
            .owner
            .as_ref()
            .map_or_else(|| "Вход для владельцев".to_owned(), |o| o.full_name.clone())
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__logo">
                <span class="site-header__logo-mark">"120"</span>
                <span class="site-header__logo-text">"минут"</span>
            </A>
            <nav class="site-header__nav">
                <A href="/top20" attr:class="site-header__link">"ТОП-20"</A>
                <A href="/company" attr:class="site-header__link">"О компании"</A>
                <A href="/add-listing" attr:class="site-header__link site-header__link--accent">
                    "Добавить объект"
                </A>
                <a href=owner_href class="site-header__link">{owner_label}</a>
            </nav>
        </header>
    }
}
