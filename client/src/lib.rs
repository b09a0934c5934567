//! # hourly-client
//!
//! Leptos frontend for the "120 минут" hourly-stay marketplace: public
//! catalog, listing pages, the onboarding wizard, the TOP-20 page, and the
//! admin and owner back offices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: with `ssr` the server links it to render pages, with
//! `hydrate` it runs as WASM in the browser. All business data comes from
//! remote functions reached through the server's `/api/{service}` relay.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the Leptos app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
