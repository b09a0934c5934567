//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, navigation, session
//! checks) and delegates rendering details to `components`.

pub mod add_listing;
pub mod admin_login;
pub mod admin_panel;
pub mod city;
pub mod company;
pub mod home;
pub mod listing;
pub mod not_found;
pub mod owner_dashboard;
pub mod owner_login;
pub mod room_details;
pub mod top20;
