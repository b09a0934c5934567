//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p>"Такой страницы нет"</p>
            <A href="/" attr:class="btn btn--primary">"На главную"</A>
        </div>
    }
}
