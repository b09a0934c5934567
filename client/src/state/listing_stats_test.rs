use super::*;

use crate::net::types::StatsSummary;

fn day(date: &str, views: i64) -> StatsDay {
    StatsDay { date: date.to_owned(), views, ..StatsDay::default() }
}

fn stats(days: Vec<StatsDay>) -> ListingStats {
    ListingStats { stats: days, summary: StatsSummary::default() }
}

#[test]
fn remote_order_is_reversed_for_charts() {
    let s = stats(vec![day("2025-03-03", 4), day("2025-03-02", 9), day("2025-03-01", 1)]);
    let dates: Vec<String> = chronological(&s).into_iter().map(|d| d.date).collect();
    assert_eq!(dates, vec!["2025-03-01", "2025-03-02", "2025-03-03"]);
}

#[test]
fn peak_day_prefers_earliest_tie() {
    let s = stats(vec![day("2025-03-03", 9), day("2025-03-02", 9), day("2025-03-01", 1)]);
    assert_eq!(peak_day(&s).map(|d| d.date), Some("2025-03-02".to_owned()));
    assert_eq!(peak_day(&stats(vec![day("2025-03-01", 0)])), None);
    assert_eq!(peak_day(&stats(Vec::new())), None);
}

#[test]
fn bars_scale_to_busiest_day() {
    assert_eq!(bar_percent(5, 10), 50);
    assert_eq!(bar_percent(10, 10), 100);
    assert_eq!(bar_percent(3, 0), 0);
    assert_eq!(bar_percent(0, 10), 0);
}

#[test]
fn period_days() {
    assert_eq!(StatsPeriod::ALL.map(StatsPeriod::days), [7, 30, 90]);
    assert_eq!(StatsPeriod::default(), StatsPeriod::Month);
}

#[test]
fn select_skips_reload_for_same_view() {
    let mut state = StatsState::default();
    assert!(state.select(4, StatsPeriod::Week));
    state.stats = Some(stats(Vec::new()));
    assert!(!state.select(4, StatsPeriod::Week));
    assert!(state.select(4, StatsPeriod::Quarter));
    assert!(state.stats.is_none());
}
