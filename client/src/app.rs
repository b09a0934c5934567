//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    add_listing::AddListingPage, admin_login::AdminLoginPage, admin_panel::AdminPanelPage, city::CityPage, company::CompanyPage,
    home::HomePage, listing::ListingPage, not_found::NotFoundPage, owner_dashboard::OwnerDashboardPage,
    owner_login::OwnerLoginPage, room_details::RoomDetailsPage, top20::Top20Page,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and toast contexts, restores stored sessions
/// after hydration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Effects only run in the browser, so storage is read after hydration.
    Effect::new(move || crate::util::auth::restore_sessions(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/hourly-ui.css"/>
        <Title text="120 минут — почасовая аренда отелей"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("city"), ParamSegment("city")) view=CityPage/>
                    <Route path=(StaticSegment("listing"), ParamSegment("id")) view=ListingPage/>
                    <Route
                        path=(StaticSegment("listing"), ParamSegment("id"), StaticSegment("room"), ParamSegment("index"))
                        view=RoomDetailsPage
                    />
                    <Route path=StaticSegment("top20") view=Top20Page/>
                    <Route path=StaticSegment("company") view=CompanyPage/>
                    <Route path=StaticSegment("add-listing") view=AddListingPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPanelPage/>
                    <Route path=(StaticSegment("owner"), StaticSegment("login")) view=OwnerLoginPage/>
                    <Route path=StaticSegment("owner") view=OwnerDashboardPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
