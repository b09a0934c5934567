//! Owner statistics tab: views and contact clicks per listing.

#[cfg(test)]
#[path = "listing_stats_test.rs"]
mod listing_stats_test;

use crate::net::types::{ListingStats, StatsDay};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatsPeriod {
    Week,
    #[default]
    Month,
    Quarter,
}

impl StatsPeriod {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "7 дней",
            Self::Month => "30 дней",
            Self::Quarter => "90 дней",
        }
    }
}

/// Days oldest first, for a left-to-right chart.
#[must_use]
pub fn chronological(stats: &ListingStats) -> Vec<StatsDay> {
    let mut days = stats.stats.clone();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

/// Bar height in percent of the busiest day.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn bar_percent(views: i64, busiest: i64) -> u8 {
    if busiest <= 0 || views <= 0 {
        return 0;
    }
    ((views.min(busiest) as f64 / busiest as f64) * 100.0).round() as u8
}

/// Day with the most views; the earliest wins a tie.
#[must_use]
pub fn peak_day(stats: &ListingStats) -> Option<StatsDay> {
    chronological(stats).into_iter().rev().max_by_key(|d| d.views).filter(|d| d.views > 0)
}

#[derive(Clone, Debug, Default)]
pub struct StatsState {
    pub listing_id: Option<i64>,
    pub period: StatsPeriod,
    pub stats: Option<ListingStats>,
    pub loading: bool,
}

impl StatsState {
    /// Change listing or period; returns whether a reload is needed.
    pub fn select(&mut self, listing_id: i64, period: StatsPeriod) -> bool {
        if self.listing_id == Some(listing_id) && self.period == period && self.stats.is_some() {
            return false;
        }
        self.listing_id = Some(listing_id);
        self.period = period;
        self.stats = None;
        true
    }
}
