//! Reusable view components.

pub mod admin;
pub mod city_carousel;
pub mod field;
pub mod header;
pub mod image_lightbox;
pub mod image_uploader;
pub mod listing_card;
pub mod listing_steps;
pub mod listings_view;
pub mod live_countdown;
pub mod map_view;
pub mod owner;
pub mod search_hero;
pub mod toast_host;
