//! Back-office components used by the admin panel tabs.

pub mod assign_listings_modal;
pub mod bonus_dialog;
pub mod employee_card;
pub mod employee_form_dialog;
pub mod employees_tab;
pub mod listing_card;
pub mod listing_form_dialog;
pub mod listings_filters;
pub mod listings_tab;
pub mod moderation_dialog;
pub mod moderation_tab;
pub mod owner_card;
pub mod owner_form_dialog;
pub mod owners_tab;
pub mod payouts_tab;
pub mod position_dialog;
pub mod subscription_dialog;
