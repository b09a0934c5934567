//! TOP-20 premium placement page state.
//!
//! Positions are sold by a remote auction; this module only selects the
//! city and turns the position list into display entries.

#[cfg(test)]
#[path = "top20_test.rs"]
mod top20_test;

use crate::net::types::{Top20Booking, Top20Position};

pub const TOP20_CITIES: [&str; 6] = ["Москва", "Санкт-Петербург", "Новосибирск", "Екатеринбург", "Казань", "Нижний Новгород"];

/// A booked slot ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Top20Entry {
    pub position: i64,
    pub booking: Top20Booking,
}

#[derive(Clone, Debug)]
pub struct Top20State {
    pub city: String,
    pub entries: Vec<Top20Entry>,
    pub loading: bool,
}

impl Default for Top20State {
    fn default() -> Self {
        Self { city: TOP20_CITIES[0].to_owned(), entries: Vec::new(), loading: false }
    }
}

/// City from the `?city=` query parameter, when it is one of the TOP-20 cities.
#[must_use]
pub fn city_from_query(param: Option<&str>) -> Option<&'static str> {
    let param = param?;
    TOP20_CITIES.iter().copied().find(|c| *c == param)
}

/// Booked positions with booking details, ordered by position.
#[must_use]
pub fn booked_entries(positions: Vec<Top20Position>) -> Vec<Top20Entry> {
    let mut entries: Vec<Top20Entry> = positions
        .into_iter()
        .filter(|p| p.is_booked)
        .filter_map(|p| p.booking_info.map(|booking| Top20Entry { position: p.position, booking }))
        .collect();
    entries.sort_by_key(|e| e.position);
    entries
}

impl Top20State {
    /// Switch city; stale entries are dropped until the reload finishes.
    pub fn select_city(&mut self, city: &str) -> bool {
        if self.city == city {
            return false;
        }
        self.city = city.to_owned();
        self.entries.clear();
        true
    }
}
