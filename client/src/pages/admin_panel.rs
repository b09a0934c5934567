//! Back office at `/admin`: tabs gated by the signed-in employee's permissions.

#[cfg(test)]
#[path = "admin_panel_test.rs"]
mod admin_panel_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::admin::employees_tab::EmployeesTab;
use crate::components::admin::listings_tab::ListingsTab;
use crate::components::admin::moderation_tab::ModerationTab;
use crate::components::admin::owners_tab::OwnersTab;
use crate::components::admin::payouts_tab::PayoutsTab;
use crate::net::types::Permission;
use crate::state::auth::AuthState;
use crate::util::auth::{install_admin_redirect, logout_admin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AdminTab {
    Listings,
    Moderation,
    Owners,
    Employees,
    Payouts,
}

impl AdminTab {
    const ALL: [Self; 5] = [Self::Listings, Self::Moderation, Self::Owners, Self::Employees, Self::Payouts];

    fn label(self) -> &'static str {
        match self {
            Self::Listings => "Объекты",
            Self::Moderation => "Модерация",
            Self::Owners => "Владельцы",
            Self::Employees => "Сотрудники",
            Self::Payouts => "Выплаты",
        }
    }

    /// Moderation rides on the listings grant; staff and payouts are superadmin-only.
    fn allowed(self, auth: &AuthState) -> bool {
        match self {
            Self::Listings | Self::Moderation => auth.has_permission(Permission::Listings),
            Self::Owners => auth.has_permission(Permission::Owners),
            Self::Employees | Self::Payouts => auth.is_superadmin(),
        }
    }
}

/// Tabs the current session may open, in display order.
pub(crate) fn visible_tabs(auth: &AuthState) -> Vec<AdminTab> {
    AdminTab::ALL.into_iter().filter(|tab| tab.allowed(auth)).collect()
}

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_admin_redirect(auth, navigate);

    let tabs = Memo::new(move |_| auth.with(visible_tabs));
    let selected = RwSignal::new(None::<AdminTab>);
    let active = move || {
        let tabs = tabs.get();
        selected.get().filter(|tab| tabs.contains(tab)).or_else(|| tabs.first().copied())
    };

    view! {
        <Show when=move || auth.with(|a| a.admin.is_some())>
            <div class="admin-page">
                <header class="admin-page__header">
                    <h1>"Админ-панель"</h1>
                    <span class="muted">{move || auth.with(AuthState::admin_display_name)}</span>
                    <button class="btn btn--small" on:click=move |_| logout_admin(auth)>"Выйти"</button>
                </header>
                <nav class="tabs">
                    {move || {
                        tabs.get()
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="tabs__item"
                                        class=("tabs__item--active", move || active() == Some(tab))
                                        on:click=move |_| selected.set(Some(tab))
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                {move || match active() {
                    Some(AdminTab::Listings) => view! { <ListingsTab/> }.into_any(),
                    Some(AdminTab::Moderation) => view! { <ModerationTab/> }.into_any(),
                    Some(AdminTab::Owners) => view! { <OwnersTab/> }.into_any(),
                    Some(AdminTab::Employees) => view! { <EmployeesTab/> }.into_any(),
                    Some(AdminTab::Payouts) => view! { <PayoutsTab/> }.into_any(),
                    None => view! { <p class="page-status">"Нет доступных разделов"</p> }.into_any(),
                }}
            </div>
        </Show>
    }
}
