//! Reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds plain data plus pure operations. The app wraps the
//! shared ones (`auth`, `ui`) in `RwSignal` and provides them via context;
//! pages own the rest as local signals.

pub mod admin_listings;
pub mod auth;
pub mod bonuses;
pub mod catalog;
pub mod employees;
pub mod listing_form;
pub mod listing_stats;
pub mod owner_dashboard;
pub mod owners;
pub mod promotion;
pub mod top20;
pub mod ui;
pub mod wizard;
